/*
[INPUT]:  CSV/ZIP bytes and ImportParams
[OUTPUT]: Import job status JSON and action flags
[POS]:    HTTP layer - subscriber import endpoints
[UPDATE]: When adding import options
*/

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};
use tracing::warn;

use crate::http::client::validated_body;
use crate::http::{ListmonkClient, Result};
use crate::types::ImportParams;

impl ListmonkClient {
    /// Start a bulk subscriber import.
    ///
    /// The file goes in the multipart field `file`, the JSON-encoded
    /// `params` alongside it. Returns `{}` when the server refuses the job.
    ///
    /// POST /api/import/subscribers
    pub async fn import_subscribers(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        params: &ImportParams,
    ) -> Result<Value> {
        let params = serde_json::to_string(&validated_body(params)?)?;
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(filename.to_string()))
            .text("params", params);
        let builder = self
            .api_request(Method::POST, "/import/subscribers")?
            .multipart(form);

        let reply = self.send_reply(builder).await?;
        if !reply.is_success() {
            warn!(status = reply.status.as_u16(), "subscriber import refused");
            return Ok(json!({}));
        }
        Ok(reply.into_data_or(json!({})))
    }

    /// GET /api/import/subscribers
    pub async fn get_import_status(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/import/subscribers")?;
        self.send_data(builder, json!({})).await
    }

    /// Stop the running import and clear its state
    ///
    /// DELETE /api/import/subscribers
    pub async fn stop_import(&self) -> Result<bool> {
        let builder = self.api_request(Method::DELETE, "/import/subscribers")?;
        self.send_action(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::ListmonkError;
    use crate::http::test_support::client_for;
    use crate::types::ImportParams;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_import_sends_file_and_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/import/subscribers"))
            .and(body_string_contains("filename=\"subs.csv\""))
            .and(body_string_contains("email,name"))
            .and(body_string_contains("name=\"params\""))
            .and(body_string_contains(r#""mode":"subscribe""#))
            .and(body_string_contains(r#""lists":[3]"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "status": "importing", "imported": 0, "total": 2 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ImportParams {
            lists: vec![3],
            ..ImportParams::default()
        };
        let status = client_for(&server)
            .import_subscribers(b"email,name\na@x.com,A\n".to_vec(), "subs.csv", &params)
            .await
            .expect("import_subscribers");
        assert_eq!(status["status"], "importing");
    }

    #[tokio::test]
    async fn test_import_refused_is_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/import/subscribers"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "import running" })))
            .mount(&server)
            .await;

        let status = client_for(&server)
            .import_subscribers(Vec::new(), "empty.csv", &ImportParams::default())
            .await
            .expect("import_subscribers");
        assert_eq!(status, json!({}));
    }

    #[tokio::test]
    async fn test_import_rejects_bad_params() {
        let server = MockServer::start().await;
        let params = ImportParams {
            mode: "merge".to_string(),
            delim: ";;".to_string(),
            ..ImportParams::default()
        };
        let err = client_for(&server)
            .import_subscribers(Vec::new(), "subs.csv", &params)
            .await
            .unwrap_err();
        match err {
            ListmonkError::Validation(errors) => assert_eq!(errors.fields(), vec!["mode", "delim"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_import_status_and_stop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/import/subscribers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "status": "finished", "imported": 2, "total": 2 }
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/import/subscribers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": true })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let status = client.get_import_status().await.expect("get_import_status");
        assert_eq!(status["imported"], 2);
        assert!(client.stop_import().await.expect("stop_import"));
    }
}
