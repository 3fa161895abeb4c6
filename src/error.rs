/// Caller-supplied turn or dialog settings that cannot be sent.
///
/// Raised before any stream is opened.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("a text query cannot be combined with audio input settings")]
    ConflictingInput,
    #[error("text query is empty")]
    EmptyTextQuery,
    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(i32),
    #[error("device location out of range: latitude={latitude}, longitude={longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: String, value: String },
}

/// Everything that can go wrong while a dialog turn is running.
///
/// `Clone` so a single failure can be reported both as a `StreamError` event
/// and in the turn's termination notice.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DialogError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One inbound frame, or a payload embedded in it, could not be parsed.
    /// The stream stays open.
    #[error("failed to decode {payload}: {message}")]
    Decode { payload: String, message: String },

    /// The underlying stream failed. The turn ends.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("stream closed")]
    Closed,

    #[error("previous turn of this dialog has not terminated")]
    TurnInProgress,
}

impl DialogError {
    pub fn decode(payload: &str, error: impl std::fmt::Display) -> Self {
        DialogError::Decode {
            payload: payload.to_string(),
            message: error.to_string(),
        }
    }

    pub fn transport(error: impl std::fmt::Display) -> Self {
        DialogError::Transport(error.to_string())
    }

    /// Whether this error ends the stream it was raised on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DialogError::Transport(_) | DialogError::Closed)
    }
}
