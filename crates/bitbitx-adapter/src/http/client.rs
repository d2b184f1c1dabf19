/*
[INPUT]:  HTTP configuration (base URL, timeouts, DES3 key)
[OUTPUT]: Configured reqwest client ready for encrypted API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Url};
use std::time::Duration;

use crate::auth::SessionManager;
use crate::codec::EnvelopeCodec;
use crate::http::{BitbitxError, Result};

/// Exchange identity reported by the adapter
pub const EXCHANGE_NAME: &str = "bitbitx.com";

/// Base URL for the bitbitx API
const API_BASE_URL: &str = "http://114.115.202.30:82/";

/// The single service endpoint every encrypted call POSTs to
const SERVICE_ENDPOINT: &str = "api_out/clientService";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the bitbitx API.
///
/// Owns the envelope codec (and therefore the DES3 key) and the session
/// populated by [`login`](BitbitxClient::login).
#[derive(Debug, Clone)]
pub struct BitbitxClient {
    http_client: Client,
    base_url: Url,
    codec: EnvelopeCodec,
    session: SessionManager,
}

impl BitbitxClient {
    /// Create a new client with default configuration.
    ///
    /// The DES3 key must be 16 or 24 bytes; anything else is rejected
    /// here rather than on the first call.
    pub fn new(des3_key: impl Into<Vec<u8>>) -> Result<Self> {
        Self::with_config(des3_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(des3_key: impl Into<Vec<u8>>, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(des3_key, config, API_BASE_URL)
    }

    /// Create a new client against a non-default base URL (mock servers)
    pub fn with_config_and_base_url(
        des3_key: impl Into<Vec<u8>>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            codec: EnvelopeCodec::new(des3_key)?,
            session: SessionManager::new(),
        })
    }

    /// Exchange this adapter talks to
    pub fn exchange_name(&self) -> &'static str {
        EXCHANGE_NAME
    }

    /// The envelope codec used for this client's key
    pub fn codec(&self) -> &EnvelopeCodec {
        &self.codec
    }

    /// Session populated by login and consumed by authenticated calls
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Build the full URL of the service endpoint
    fn service_url(&self) -> Result<Url> {
        Ok(self.base_url.join(SERVICE_ENDPOINT)?)
    }

    /// POST a sealed envelope and return the raw response body.
    ///
    /// Unauthenticated calls carry no custom headers; authenticated
    /// calls attach the session's `token` and `uuid` headers.
    pub(crate) async fn post_envelope(
        &self,
        envelope: String,
        authenticated: bool,
    ) -> Result<String> {
        let url = self.service_url()?;
        let mut builder = self.http_client.post(url).body(envelope);

        if authenticated {
            let session = self.session.get().ok_or(BitbitxError::NotAuthenticated)?;
            builder = builder
                .header("token", session.token)
                .header("uuid", session.uuid);
        }

        let response = builder.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"0123456789abcdefghijklmn";

    #[test]
    fn test_client_creation() {
        let client = BitbitxClient::new(KEY).unwrap();
        assert_eq!(client.exchange_name(), "bitbitx.com");
        assert!(!client.session().is_authenticated());
    }

    #[test]
    fn test_client_rejects_bad_key() {
        match BitbitxClient::new(&b"short"[..]) {
            Err(BitbitxError::InvalidKey { length: 5 }) => {}
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn test_service_url() {
        let client = BitbitxClient::with_config_and_base_url(
            KEY,
            ClientConfig::default(),
            "http://127.0.0.1:8080",
        )
        .unwrap();
        assert_eq!(
            client.service_url().unwrap().as_str(),
            "http://127.0.0.1:8080/api_out/clientService"
        );
    }
}
