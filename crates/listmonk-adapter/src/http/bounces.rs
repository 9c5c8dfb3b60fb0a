/*
[INPUT]:  Bounce filters and ids
[OUTPUT]: Raw bounce JSON and action flags
[POS]:    HTTP layer - bounce endpoints
[UPDATE]: When adding bounce endpoints
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::client::join_ids;
use crate::http::{ListmonkClient, Result};
use crate::types::Filters;

impl ListmonkClient {
    /// GET /api/bounces?{filters}
    pub async fn get_bounces(&self, filters: &Filters) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/bounces")?.query(filters);
        self.send_data(builder, json!({})).await
    }

    /// Delete the given bounce records, or every record when `ids` is empty
    ///
    /// DELETE /api/bounces
    pub async fn delete_bounces(&self, ids: &[i64]) -> Result<bool> {
        let body = if ids.is_empty() {
            json!({ "all": true })
        } else {
            json!({ "id": join_ids(ids) })
        };
        let builder = self.api_request(Method::DELETE, "/bounces")?.json(&body);
        self.send_action(builder).await
    }
}
