/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for listmonk-adapter tests

use listmonk_adapter::{ClientConfig, Credentials, ListmonkClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Credentials every test client authenticates with
pub const TEST_USERNAME: &str = "api_user";
pub const TEST_PASSWORD: &str = "api_token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> ListmonkClient {
    let config = ClientConfig::new(server.uri(), Credentials::new(TEST_USERNAME, TEST_PASSWORD));
    ListmonkClient::new(config).expect("client init")
}

/// Expected `Authorization` header value
pub fn auth_header() -> String {
    format!("token {TEST_USERNAME}:{TEST_PASSWORD}")
}

/// Full subscriber record as the server returns it
#[allow(dead_code)]
pub fn subscriber_fixture(id: i64, email: &str) -> Value {
    json!({
        "id": id,
        "uuid": "6f0c2d0e-3a4b-4b8e-9f4d-2f1d1c0b9a88",
        "email": email,
        "name": "Fixture Subscriber",
        "status": "enabled",
        "lists": [
            { "id": 1, "name": "Default list", "subscription_status": "confirmed" }
        ],
        "attribs": { "city": "Bengaluru" },
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T10:00:00Z"
    })
}
