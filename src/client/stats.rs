#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    turns_started: u64,
    follow_on_turns: u64,
    frames_received: u64,
    audio_bytes_sent: u64,
    audio_bytes_received: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_turn(&mut self) {
        self.turns_started += 1;
    }

    pub(crate) fn record_follow_on(&mut self) {
        self.follow_on_turns += 1;
    }

    pub(crate) fn record_frame(&mut self, audio_bytes: usize) {
        self.frames_received += 1;
        self.audio_bytes_received += audio_bytes as u64;
    }

    pub(crate) fn record_audio_sent(&mut self, audio_bytes: usize) {
        self.audio_bytes_sent += audio_bytes as u64;
    }

    pub fn turns_started(&self) -> u64 {
        self.turns_started
    }

    /// Turns that ended with the service asking for another one.
    pub fn follow_on_turns(&self) -> u64 {
        self.follow_on_turns
    }

    pub fn frames_received(&self) -> u64 {
        self.frames_received
    }

    pub fn audio_bytes_sent(&self) -> u64 {
        self.audio_bytes_sent
    }

    pub fn audio_bytes_received(&self) -> u64 {
        self.audio_bytes_received
    }
}
