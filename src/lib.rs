mod channel;
mod client;
mod conversation;
mod error;

pub use assistant_dialog_types as types;
pub use channel::memory::{duplex, MemoryChannel, ServiceEnd};
pub use channel::{AssistChannel, DuplexStream, RequestTx, ResponseStream};
pub use client::{consts, Config, ConfigBuilder, Dialog, Stats};
pub use conversation::{
    build_request, AudioSettings, InboundEvent, InputModality, ResponseInterpreter, SessionState,
    Turn, TurnConfig, TurnOutcome, TurnState,
};
pub use error::{ConfigError, DialogError};
