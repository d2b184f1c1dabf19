/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitbitx-adapter tests

use bitbitx_adapter::{BitbitxClient, ClientConfig, EnvelopeCodec};
use wiremock::MockServer;

/// Three-key DES3 key used by the client under test
pub const TEST_KEY: &[u8] = b"0123456789abcdefghijklmn";

/// A different valid key, for wrong-key scenarios
#[allow(dead_code)]
pub const OTHER_KEY: &[u8] = b"nmlkjihgfedcba9876543210";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client under test, pointed at the mock server
#[allow(dead_code)]
pub fn test_client(server_uri: &str) -> BitbitxClient {
    BitbitxClient::with_config_and_base_url(TEST_KEY, ClientConfig::default(), server_uri)
        .expect("client init")
}

/// Seal a JSON response body the way the server would
#[allow(dead_code)]
pub fn sealed_response(key: &[u8], body: &serde_json::Value) -> String {
    let codec = EnvelopeCodec::new(key).expect("codec init");
    codec
        .seal_bytes(&serde_json::to_vec(body).expect("serialize body"))
        .expect("seal body")
}
