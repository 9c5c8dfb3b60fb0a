/*
[INPUT]:  Server-level queries and settings payloads
[OUTPUT]: Health flag, server config, dashboard, settings, logs
[POS]:    HTTP layer - health, config, dashboard, settings, admin, logs endpoints
[UPDATE]: When adding new server-level endpoints
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::{ListmonkClient, Result};

impl ListmonkClient {
    /// Check whether the server is healthy
    ///
    /// GET /api/health
    pub async fn health_check(&self) -> Result<bool> {
        let builder = self.api_request(Method::GET, "/health")?;
        self.send_action(builder).await
    }

    /// GET /api/config
    pub async fn get_server_config(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/config")?;
        self.send_data(builder, json!({})).await
    }

    /// GET /api/lang/{lang}
    pub async fn get_language_pack(&self, lang: &str) -> Result<Value> {
        let endpoint = format!("/lang/{lang}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_data(builder, json!({})).await
    }

    /// GET /api/dashboard/charts
    pub async fn get_dashboard_charts(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/dashboard/charts")?;
        self.send_data(builder, json!({})).await
    }

    /// GET /api/dashboard/counts
    pub async fn get_dashboard_counts(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/dashboard/counts")?;
        self.send_data(builder, json!({})).await
    }

    /// GET /api/settings
    pub async fn get_settings(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/settings")?;
        self.send_data(builder, json!({})).await
    }

    /// Replace server settings
    ///
    /// PUT /api/settings
    pub async fn update_settings(&self, settings: &Value) -> Result<bool> {
        let builder = self.api_request(Method::PUT, "/settings")?.json(settings);
        self.send_action(builder).await
    }

    /// Try an SMTP configuration without saving it
    ///
    /// POST /api/settings/smtp/test
    pub async fn test_smtp_settings(&self, smtp: &Value) -> Result<bool> {
        let builder = self
            .api_request(Method::POST, "/settings/smtp/test")?
            .json(smtp);
        self.send_action(builder).await
    }

    /// Restart the application to apply settings
    ///
    /// POST /api/admin/reload
    pub async fn reload_app(&self) -> Result<bool> {
        let builder = self.api_request(Method::POST, "/admin/reload")?;
        self.send_action(builder).await
    }

    /// Buffered application log lines
    ///
    /// GET /api/logs
    pub async fn get_logs(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/logs")?;
        self.send_data(builder, json!([])).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{AUTH_HEADER, client_for};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_health_check_sends_token_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .and(header("authorization", AUTH_HEADER))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": true })))
            .expect(1)
            .mount(&server)
            .await;

        let healthy = client_for(&server).health_check().await.expect("health_check");
        assert!(healthy);
    }

    #[tokio::test]
    async fn test_health_check_false_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        assert!(!client_for(&server).health_check().await.expect("health_check"));
    }

    #[tokio::test]
    async fn test_get_language_pack_returns_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/lang/de"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "_.code": "de", "globals.buttons.save": "Speichern" }
            })))
            .mount(&server)
            .await;

        let pack = client_for(&server)
            .get_language_pack("de")
            .await
            .expect("get_language_pack");
        assert_eq!(pack["_.code"], "de");
    }

    #[tokio::test]
    async fn test_object_endpoints_default_to_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard/counts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let counts = client_for(&server)
            .get_dashboard_counts()
            .await
            .expect("get_dashboard_counts");
        assert_eq!(counts, json!({}));
    }

    #[tokio::test]
    async fn test_update_settings_puts_body() {
        let server = MockServer::start().await;
        let settings = json!({ "app.site_name": "Newsletter" });
        Mock::given(method("PUT"))
            .and(path("/api/settings"))
            .and(body_json(&settings))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": true })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).update_settings(&settings).await.expect("update_settings"));
    }

    #[tokio::test]
    async fn test_reload_app_and_logs() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/reload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": "true" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": ["line one"] })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(!client.reload_app().await.expect("reload_app"));
        assert_eq!(client.get_logs().await.expect("get_logs"), json!(["line one"]));
    }
}
