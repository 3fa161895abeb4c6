use crate::error::DialogError;
use crate::types::{AssistRequest, AssistResponse};
use async_trait::async_trait;
use futures::stream::BoxStream;
#[cfg(test)]
use mockall::automock;

pub(crate) mod memory;

pub type RequestTx = tokio::sync::mpsc::Sender<AssistRequest>;
pub type ResponseStream = BoxStream<'static, Result<AssistResponse, DialogError>>;

/// One open `Assist` call.
///
/// Writes go through `outbound`; the channel serializes them. Dropping every
/// clone of `outbound` half-closes the client side. `inbound` yields frames in
/// arrival order and ends when the service closes the call. A
/// `DialogError::Decode` item reports a single bad frame, a fatal item
/// (`DialogError::is_fatal`) is the last item the stream yields.
pub struct DuplexStream {
    pub outbound: RequestTx,
    pub inbound: ResponseStream,
}

impl DuplexStream {
    pub fn new(outbound: RequestTx, inbound: ResponseStream) -> Self {
        Self { outbound, inbound }
    }
}

/// An authenticated channel to the assistant service that can open the
/// bidirectional `Assist` RPC.
///
/// Building the channel (TLS, credentials, deadlines) happens outside this
/// crate; see [`crate::consts`] for the endpoint and recommended deadline.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssistChannel: Send + Sync {
    async fn open_assist(&self) -> Result<DuplexStream, DialogError>;
}
