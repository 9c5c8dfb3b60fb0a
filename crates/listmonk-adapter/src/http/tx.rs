/*
[INPUT]:  TransactionalRequest
[OUTPUT]: Delivery acceptance flag
[POS]:    HTTP layer - transactional mail endpoint
[UPDATE]: When changing transactional mail options
*/

use reqwest::Method;
use tracing::warn;

use crate::http::client::validated_body;
use crate::http::{ListmonkClient, Result};
use crate::types::TransactionalRequest;

impl ListmonkClient {
    /// Send a one-off transactional message.
    ///
    /// Returns whether the server accepted the message (2xx status); the
    /// reply body is not inspected.
    ///
    /// POST /api/tx
    pub async fn send_transactional_email(&self, message: &TransactionalRequest) -> Result<bool> {
        let body = validated_body(message)?;
        let builder = self.api_request(Method::POST, "/tx")?.json(&body);
        let reply = self.send_reply(builder).await?;
        if !reply.is_success() {
            warn!(status = reply.status.as_u16(), "transactional message rejected");
        }
        Ok(reply.is_success())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::client_for;
    use crate::types::{ContentType, TransactionalRequest};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_transactional_email_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tx"))
            .and(body_json(json!({
                "subscriber_email": "user@example.com",
                "template_id": 4,
                "from_email": "noreply@example.com",
                "subject": "Welcome",
                "body": "<p>Hello</p>",
                "content_type": "html",
                "messenger": "email",
                "data": { "code": "1234" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": false })))
            .expect(1)
            .mount(&server)
            .await;

        let message = TransactionalRequest::new("user@example.com", "Welcome", "<p>Hello</p>")
            .template_id(4)
            .sender("noreply@example.com", None)
            .content_type(ContentType::Html)
            .extra("data", json!({ "code": "1234" }));

        // acceptance follows the status code, not the payload
        let sent = client_for(&server)
            .send_transactional_email(&message)
            .await
            .expect("send_transactional_email");
        assert!(sent);
    }

    #[tokio::test]
    async fn test_send_with_stored_template_skips_content_checks() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tx"))
            .and(body_json(json!({
                "subscriber_email": "user@example.com",
                "template_id": 4,
                "subject": "",
                "body": "",
                "content_type": "html",
                "messenger": "email"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": true })))
            .expect(1)
            .mount(&server)
            .await;

        let message = TransactionalRequest::new("user@example.com", "", "").template_id(4);
        let sent = client_for(&server)
            .send_transactional_email(&message)
            .await
            .expect("send_transactional_email");
        assert!(sent);
    }

    #[tokio::test]
    async fn test_send_transactional_email_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tx"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "data": true })))
            .mount(&server)
            .await;

        let message = TransactionalRequest::new("user@example.com", "Hi", "Body");
        let sent = client_for(&server)
            .send_transactional_email(&message)
            .await
            .expect("send_transactional_email");
        assert!(!sent);
    }

    #[tokio::test]
    async fn test_send_transactional_email_validates_recipient() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tx"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let message = TransactionalRequest::new("not-an-email", "Hi", "Body");
        let err = client_for(&server)
            .send_transactional_email(&message)
            .await
            .unwrap_err();
        assert!(err.is_validation_error());
    }
}
