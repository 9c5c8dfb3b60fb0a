/*
[INPUT]:  Maintenance task names
[OUTPUT]: Maintenance status JSON and action flags
[POS]:    HTTP layer - maintenance endpoints
[UPDATE]: When adding maintenance tasks
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::client::validated_body;
use crate::http::{ListmonkClient, Result};
use crate::types::MaintenanceRequest;

impl ListmonkClient {
    /// GET /api/maintenance
    pub async fn get_maintenance_status(&self) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/maintenance")?;
        self.send_data(builder, json!({})).await
    }

    /// Run housekeeping tasks such as `subscribers` or `analytics`
    ///
    /// POST /api/maintenance
    pub async fn run_maintenance<I, S>(&self, tasks: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = validated_body(&MaintenanceRequest::new(tasks))?;
        let builder = self.api_request(Method::POST, "/maintenance")?.json(&body);
        self.send_action(builder).await
    }
}
