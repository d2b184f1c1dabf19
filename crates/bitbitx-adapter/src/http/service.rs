/*
[INPUT]:  Commands and the encrypted envelope wire format
[OUTPUT]: Decrypted, parsed response envelopes
[POS]:    HTTP layer - encrypted RPC dispatch
[UPDATE]: When the round-trip order or auth header contract changes
*/

use tracing::debug;

use crate::http::{BitbitxClient, BitbitxError, Result};
use crate::types::{ApiResponse, Command};

impl BitbitxClient {
    /// Dispatch an unauthenticated service call.
    ///
    /// Seal -> POST -> open -> parse, one synchronous round trip with no
    /// retries. Transport failures surface verbatim; decrypt failures and
    /// JSON-parse failures of the decrypted body stay distinct.
    pub async fn call(&self, command: &Command) -> Result<ApiResponse> {
        self.dispatch(command, false).await
    }

    /// Dispatch a service call carrying the session's `token` and `uuid`
    /// headers. Fails with `NotAuthenticated` before touching the network
    /// if no login has populated the session.
    pub async fn call_authenticated(&self, command: &Command) -> Result<ApiResponse> {
        self.dispatch(command, true).await
    }

    async fn dispatch(&self, command: &Command, authenticated: bool) -> Result<ApiResponse> {
        debug!(service_id = %command.service_id, authenticated, "dispatching service call");

        let envelope = self.codec().seal(command)?;
        let body = self.post_envelope(envelope, authenticated).await?;
        let plaintext = self.codec().open(&body)?;

        serde_json::from_slice(&plaintext)
            .map_err(|e| BitbitxError::MalformedResponse(e.to_string()))
    }
}
