/*
[INPUT]:  Template ids and raw template payloads
[OUTPUT]: Raw template JSON and action flags
[POS]:    HTTP layer - template endpoints
[UPDATE]: When adding template endpoints
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::{ListmonkClient, Result};

impl ListmonkClient {
    /// GET /api/templates
    pub async fn get_templates(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/templates")?;
        self.send_data(builder, json!([])).await
    }

    /// GET /api/templates/{id}
    pub async fn get_template(&self, id: i64) -> Result<Option<Value>> {
        let endpoint = format!("/templates/{id}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_optional_data(builder, &endpoint).await
    }

    /// POST /api/templates
    pub async fn create_template(&self, template: &Value) -> Result<Option<Value>> {
        let builder = self.api_request(Method::POST, "/templates")?.json(template);
        self.send_optional_data(builder, "/templates").await
    }

    /// PUT /api/templates/{id}
    pub async fn update_template(&self, id: i64, template: &Value) -> Result<Option<Value>> {
        let endpoint = format!("/templates/{id}");
        let builder = self.api_request(Method::PUT, &endpoint)?.json(template);
        self.send_optional_data(builder, &endpoint).await
    }

    /// DELETE /api/templates/{id}
    pub async fn delete_template(&self, id: i64) -> Result<bool> {
        let endpoint = format!("/templates/{id}");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_action(builder).await
    }
}
