use crate::error::DialogError;
use crate::types::screen::ScreenOutFormat;

/// Everything a turn reports to its caller, in the order the service sent it.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// The service stopped listening; further audio is ignored.
    EndOfUtterance,
    /// What the service has recognized so far in this frame.
    Transcript { text: String, is_final: bool },
    /// Synthesized speech, in the encoding requested for audio out.
    AudioChunk(Vec<u8>),
    DeviceAction(serde_json::Value),
    DialogResponse { display_text: String },
    VolumeChanged(i32),
    ScreenPayload { format: ScreenOutFormat, data: Vec<u8> },
    DebugInfo(serde_json::Value),
    StreamError(DialogError),
    /// Always the last event of a turn.
    StreamEnded {
        error: Option<DialogError>,
        continue_dialog: bool,
    },
}

/// Termination notice of a turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TurnOutcome {
    /// Set when the stream failed rather than closing normally.
    pub error: Option<DialogError>,
    /// The service asked for another turn without new user action.
    pub continue_dialog: bool,
}

impl From<TurnOutcome> for InboundEvent {
    fn from(outcome: TurnOutcome) -> Self {
        InboundEvent::StreamEnded {
            error: outcome.error,
            continue_dialog: outcome.continue_dialog,
        }
    }
}
