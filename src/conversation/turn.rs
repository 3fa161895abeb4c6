use crate::channel::{AssistChannel, DuplexStream, RequestTx, ResponseStream};
use crate::client::Stats;
use crate::conversation::event::{InboundEvent, TurnOutcome};
use crate::conversation::interpreter::ResponseInterpreter;
use crate::conversation::state::{InputModality, SessionState};
use crate::error::DialogError;
use crate::types::AssistRequest;
use futures_util::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Where a [`Turn`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// No stream has been opened yet.
    Idle,
    /// The configuration frame is written and frames flow both ways.
    StreamOpen,
    /// The inbound side has closed. Final for this turn.
    Terminated,
}

/// One request/response cycle of a dialog.
///
/// Audio goes up through [`Turn::write`]; everything the service sends comes
/// back as [`InboundEvent`]s, ending with `InboundEvent::StreamEnded`. The
/// event receiver can be taken with [`Turn::events`] and drained on another
/// task while this handle keeps writing.
pub struct Turn {
    session: Arc<Mutex<SessionState>>,
    stats: Arc<Mutex<Stats>>,
    capacity: usize,
    modality: InputModality,
    outbound: Option<RequestTx>,
    events: Option<mpsc::Receiver<InboundEvent>>,
    reader: Option<JoinHandle<TurnOutcome>>,
    terminated: Arc<AtomicBool>,
}

impl Turn {
    pub(crate) fn new(
        session: Arc<Mutex<SessionState>>,
        stats: Arc<Mutex<Stats>>,
        capacity: usize,
        terminated: Arc<AtomicBool>,
    ) -> Self {
        Self {
            session,
            stats,
            capacity,
            modality: InputModality::Audio,
            outbound: None,
            events: None,
            reader: None,
            terminated,
        }
    }

    /// Opens the stream and writes `request` before anything else.
    pub(crate) async fn open<C>(&mut self, channel: &C, request: AssistRequest) -> Result<(), DialogError>
    where
        C: AssistChannel + ?Sized,
    {
        if self.state() != TurnState::Idle {
            return Err(DialogError::TurnInProgress);
        }

        let modality = match request.config() {
            Some(config) if config.text_query().is_some() => InputModality::Text,
            _ => InputModality::Audio,
        };
        let DuplexStream { outbound, inbound } = channel.open_assist().await?;
        outbound
            .send(request)
            .await
            .map_err(|_| DialogError::Closed)?;
        tracing::info!("assist stream open");

        let (events_tx, events_rx) = mpsc::channel(self.capacity);
        self.reader = Some(tokio::spawn(read_inbound(
            inbound,
            events_tx,
            self.session.clone(),
            self.stats.clone(),
            self.terminated.clone(),
        )));
        self.modality = modality;
        self.outbound = Some(outbound);
        self.events = Some(events_rx);
        Ok(())
    }

    pub fn state(&self) -> TurnState {
        if self.terminated.load(Ordering::Acquire) {
            TurnState::Terminated
        } else if self.reader.is_none() {
            TurnState::Idle
        } else {
            TurnState::StreamOpen
        }
    }

    /// Sends a chunk of raw audio in the encoding chosen for audio in.
    ///
    /// Dropped without error when the turn was opened with a text query, after
    /// [`Turn::end`], or once the stream has terminated. Waits while the
    /// transport applies backpressure.
    pub async fn write(&self, audio: &[u8]) {
        let Some(outbound) = &self.outbound else {
            tracing::debug!("outbound side closed, dropping {} bytes", audio.len());
            return;
        };
        if self.terminated.load(Ordering::Acquire) {
            return;
        }
        if self.modality == InputModality::Text {
            tracing::debug!("text turn, dropping {} bytes of audio", audio.len());
            return;
        }

        if outbound
            .send(AssistRequest::AudioIn(audio.to_vec()))
            .await
            .is_err()
        {
            tracing::debug!("assist stream no longer accepts audio");
            return;
        }
        lock(&self.stats).record_audio_sent(audio.len());
    }

    /// Packs 16-bit samples little-endian, as LINEAR16 expects, and writes them.
    pub async fn write_samples(&self, samples: &[i16]) {
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        self.write(&bytes).await
    }

    /// Half-closes the outbound side. Inbound frames already in flight are
    /// still delivered; the turn terminates when the service closes.
    pub fn end(&mut self) {
        if self.outbound.take().is_some() {
            tracing::debug!("half-closing assist stream");
        }
    }

    /// Takes the event receiver. Returns `None` if it was already taken.
    pub fn events(&mut self) -> Option<mpsc::Receiver<InboundEvent>> {
        self.events.take()
    }

    /// Next event, when the receiver has not been taken.
    pub async fn next_event(&mut self) -> Option<InboundEvent> {
        match self.events.as_mut() {
            Some(events) => events.recv().await,
            None => None,
        }
    }

    /// Ends the turn and waits for its termination notice. Events nobody has
    /// read yet are discarded.
    pub async fn finish(mut self) -> TurnOutcome {
        self.end();
        self.events.take();
        match self.reader.take() {
            Some(reader) => reader.await.unwrap_or_else(|e| TurnOutcome {
                error: Some(DialogError::transport(format!("inbound task failed: {}", e))),
                continue_dialog: false,
            }),
            None => TurnOutcome::default(),
        }
    }
}

async fn read_inbound(
    mut inbound: ResponseStream,
    events: mpsc::Sender<InboundEvent>,
    session: Arc<Mutex<SessionState>>,
    stats: Arc<Mutex<Stats>>,
    terminated: Arc<AtomicBool>,
) -> TurnOutcome {
    let mut interpreter = ResponseInterpreter::new();
    let mut error = None;

    while let Some(item) = inbound.next().await {
        match item {
            Ok(frame) => {
                let produced = {
                    let mut state = lock(&session);
                    interpreter.interpret(&frame, &mut state)
                };
                let audio_bytes = frame.audio_out.as_ref().map_or(0, |a| a.audio_data.len());
                lock(&stats).record_frame(audio_bytes);
                tracing::debug!("received frame, {} events", produced.len());

                for event in produced {
                    emit(&events, event).await;
                }
            }
            Err(e) if e.is_fatal() => {
                tracing::error!("assist stream failed: {}", e);
                emit(&events, InboundEvent::StreamError(e.clone())).await;
                error = Some(e);
                break;
            }
            Err(e) => {
                tracing::warn!("skipping undecodable frame: {}", e);
                emit(&events, InboundEvent::StreamError(e)).await;
            }
        }
    }

    let outcome = interpreter.outcome(error);
    if outcome.continue_dialog {
        lock(&stats).record_follow_on();
    }
    tracing::info!(
        "assist stream closed, continue_dialog={}",
        outcome.continue_dialog
    );
    terminated.store(true, Ordering::Release);
    emit(&events, outcome.clone().into()).await;
    outcome
}

async fn emit(events: &mpsc::Sender<InboundEvent>, event: InboundEvent) {
    if let Err(e) = events.send(event).await {
        tracing::trace!("event receiver dropped: {:?}", e.0);
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
