use crate::channel::AssistChannel;
use crate::conversation::{build_request, lock, SessionState, Turn, TurnConfig};
use crate::error::DialogError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

mod config;
pub mod consts;
mod stats;

pub use config::{Config, ConfigBuilder};
pub use stats::Stats;

/// A multi-turn conversation with the assistant service.
///
/// Holds the state that carries from one turn to the next (continuation
/// token, volume, input modality). Turns run one at a time; start the next
/// only after the previous one reported `StreamEnded`.
pub struct Dialog<C: AssistChannel> {
    channel: C,
    config: Config,
    session: Arc<Mutex<SessionState>>,
    stats: Arc<Mutex<Stats>>,
    current: Mutex<Option<Arc<AtomicBool>>>,
}

impl<C: AssistChannel> Dialog<C> {
    pub fn new(channel: C) -> Self {
        Self::with_config(channel, Config::new())
    }

    pub fn with_config(channel: C, config: Config) -> Self {
        Self {
            channel,
            config,
            session: Arc::new(Mutex::new(SessionState::new())),
            stats: Arc::new(Mutex::new(Stats::new())),
            current: Mutex::new(None),
        }
    }

    /// Opens a new turn and sends its configuration frame.
    ///
    /// Fails with a [`crate::ConfigError`] before anything is sent when `turn`
    /// is inconsistent, and with `DialogError::TurnInProgress` while the
    /// previous turn has not terminated.
    pub async fn start_turn(&self, turn: TurnConfig) -> Result<Turn, DialogError> {
        let turn = self.config.apply(turn);
        turn.validate()?;

        let terminated = Arc::new(AtomicBool::new(false));
        {
            let mut current = lock(&self.current);
            if let Some(previous) = current.as_ref() {
                if !previous.load(Ordering::Acquire) {
                    return Err(DialogError::TurnInProgress);
                }
            }
            *current = Some(terminated.clone());
        }

        let request = build_request(&turn, &mut lock(&self.session));
        let mut handle = Turn::new(
            self.session.clone(),
            self.stats.clone(),
            self.config.capacity(),
            terminated.clone(),
        );
        if let Err(e) = handle.open(&self.channel, request).await {
            tracing::error!("failed to open assist stream: {}", e);
            terminated.store(true, Ordering::Release);
            return Err(e);
        }

        lock(&self.stats).record_turn();
        Ok(handle)
    }

    /// Forgets the continuation token and volume, so the next turn starts an
    /// unrelated dialog.
    pub fn reset(&self) {
        lock(&self.session).reset();
        tracing::debug!("dialog state reset");
    }

    pub fn session_state(&self) -> SessionState {
        lock(&self.session).clone()
    }

    pub fn stats(&self) -> Stats {
        lock(&self.stats).clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
