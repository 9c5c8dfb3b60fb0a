/*
[INPUT]:  File bytes and media filters
[OUTPUT]: Uploaded media metadata and media listings
[POS]:    HTTP layer - media library endpoints
[UPDATE]: When adding media endpoints
*/

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use crate::http::{ListmonkClient, Result};
use crate::types::Filters;

impl ListmonkClient {
    /// Upload a file to the media library as the multipart field `file`
    ///
    /// POST /api/media/upload
    pub async fn upload_media(&self, bytes: Vec<u8>, filename: &str) -> Result<Option<Value>> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
        let builder = self.api_request(Method::POST, "/media/upload")?.multipart(form);
        self.send_optional_data(builder, "/media/upload").await
    }

    /// GET /api/media?{filters}
    pub async fn get_media(&self, filters: &Filters) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/media")?.query(filters);
        self.send_data(builder, json!([])).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{AUTH_HEADER, client_for};
    use crate::types::Filters;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_upload_media_sends_multipart_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/media/upload"))
            .and(header("authorization", AUTH_HEADER))
            .and(body_string_contains("name=\"file\"; filename=\"logo.png\""))
            .and(body_string_contains("PNGDATA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 7, "filename": "logo.png", "url": "http://localhost:9000/uploads/logo.png" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let media = client_for(&server)
            .upload_media(b"PNGDATA".to_vec(), "logo.png")
            .await
            .expect("upload_media")
            .expect("media returned");
        assert_eq!(media["id"], 7);
    }

    #[tokio::test]
    async fn test_upload_media_rejected_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/media/upload"))
            .respond_with(ResponseTemplate::new(413))
            .mount(&server)
            .await;

        let media = client_for(&server)
            .upload_media(vec![0; 16], "big.bin")
            .await
            .expect("upload_media");
        assert!(media.is_none());
    }

    #[tokio::test]
    async fn test_get_media() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/media"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": 1, "filename": "a.png" }]
            })))
            .mount(&server)
            .await;

        let media = client_for(&server).get_media(&Filters::new()).await.expect("get_media");
        assert_eq!(media[0]["filename"], "a.png");
    }
}
