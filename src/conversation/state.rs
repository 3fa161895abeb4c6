use crate::types::audio::DEFAULT_VOLUME_PERCENTAGE;

/// Whether the current turn streams audio up or carries a text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputModality {
    #[default]
    Audio,
    Text,
}

/// State carried from one turn of a dialog to the next.
///
/// Owned by the dialog; only the request builder and the response
/// interpreter of the turn currently open write to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    continuation_token: Option<Vec<u8>>,
    volume_percentage: i32,
    input_modality: InputModality,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            continuation_token: None,
            volume_percentage: DEFAULT_VOLUME_PERCENTAGE,
            input_modality: InputModality::Audio,
        }
    }

    /// Opaque state returned by the service. `None` until the first turn has
    /// produced one.
    pub fn continuation_token(&self) -> Option<&[u8]> {
        self.continuation_token.as_deref()
    }

    pub fn volume_percentage(&self) -> i32 {
        self.volume_percentage
    }

    pub fn input_modality(&self) -> InputModality {
        self.input_modality
    }

    pub(crate) fn set_continuation_token(&mut self, token: Vec<u8>) {
        self.continuation_token = Some(token);
    }

    /// Applies a service-reported volume. Zero means "unchanged".
    /// Returns whether the stored volume was replaced.
    pub(crate) fn apply_volume(&mut self, volume_percentage: i32) -> bool {
        if volume_percentage == 0 {
            return false;
        }
        self.volume_percentage = volume_percentage;
        true
    }

    pub(crate) fn set_input_modality(&mut self, modality: InputModality) {
        self.input_modality = modality;
    }

    /// Forgets everything learned from previous turns.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
