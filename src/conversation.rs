mod event;
mod interpreter;
mod request;
mod state;
mod turn;
mod turn_config;

pub use event::{InboundEvent, TurnOutcome};
pub use interpreter::ResponseInterpreter;
pub use request::build_request;
pub use state::{InputModality, SessionState};
pub(crate) use turn::lock;
pub use turn::{Turn, TurnState};
pub use turn_config::{AudioSettings, TurnConfig};
