use crate::channel::{AssistChannel, DuplexStream};
use crate::error::DialogError;
use crate::types::{AssistRequest, AssistResponse};
use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::sync::mpsc;

/// The service side of an in-process [`DuplexStream`].
pub struct ServiceEnd {
    /// Frames written by the client, in order. Yields `None` once the client
    /// half-closes.
    pub requests: mpsc::Receiver<AssistRequest>,
    /// Frames to deliver to the client. Dropping this closes the call.
    pub responses: mpsc::Sender<Result<AssistResponse, DialogError>>,
}

impl ServiceEnd {
    pub async fn respond(&self, frame: AssistResponse) -> Result<(), DialogError> {
        self.responses
            .send(Ok(frame))
            .await
            .map_err(|_| DialogError::Closed)
    }

    pub async fn fail(&self, error: DialogError) -> Result<(), DialogError> {
        self.responses
            .send(Err(error))
            .await
            .map_err(|_| DialogError::Closed)
    }
}

/// Creates a connected client/service pair backed by bounded channels.
/// A zero capacity is raised to one.
pub fn duplex(capacity: usize) -> (DuplexStream, ServiceEnd) {
    let capacity = capacity.max(1);
    let (request_tx, request_rx) = mpsc::channel(capacity);
    let (response_tx, response_rx) = mpsc::channel(capacity);

    let inbound = futures::stream::unfold(response_rx, |mut rx| async move {
        rx.recv().await.map(|item| (item, rx))
    })
    .boxed();

    (
        DuplexStream::new(request_tx, inbound),
        ServiceEnd {
            requests: request_rx,
            responses: response_tx,
        },
    )
}

/// An [`AssistChannel`] that hands the service side of every call it opens to
/// whoever holds the receiver returned by [`MemoryChannel::new`]. Useful to
/// bridge another transport in or to script a service.
pub struct MemoryChannel {
    capacity: usize,
    opened: mpsc::UnboundedSender<ServiceEnd>,
}

impl MemoryChannel {
    pub fn new(capacity: usize) -> (Self, mpsc::UnboundedReceiver<ServiceEnd>) {
        let (opened, calls) = mpsc::unbounded_channel();
        (
            Self {
                capacity: capacity.max(1),
                opened,
            },
            calls,
        )
    }
}

#[async_trait]
impl AssistChannel for MemoryChannel {
    async fn open_assist(&self) -> Result<DuplexStream, DialogError> {
        let (stream, service) = duplex(self.capacity);
        self.opened
            .send(service)
            .map_err(|_| DialogError::transport("no service is attached to the memory channel"))?;
        tracing::debug!("opened in-memory assist call");
        Ok(stream)
    }
}
