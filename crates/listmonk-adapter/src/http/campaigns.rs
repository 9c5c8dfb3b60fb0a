/*
[INPUT]:  Campaign ids, filters and raw campaign payloads
[OUTPUT]: Raw campaign JSON, action flags, rendered preview HTML
[POS]:    HTTP layer - campaign endpoints
[UPDATE]: When adding campaign endpoints or typing campaign payloads
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::{ListmonkClient, Result};
use crate::types::{CampaignStatusRequest, Filters, RequestDto};

impl ListmonkClient {
    /// GET /api/campaigns?{filters}
    pub async fn get_campaigns(&self, filters: &Filters) -> Result<Value> {
        let builder = self.api_request(Method::GET, "/campaigns")?.query(filters);
        self.send_data(builder, json!({})).await
    }

    /// GET /api/campaigns/{id}
    pub async fn get_campaign(&self, id: i64) -> Result<Option<Value>> {
        let endpoint = format!("/campaigns/{id}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_optional_data(builder, &endpoint).await
    }

    /// POST /api/campaigns
    pub async fn create_campaign(&self, campaign: &Value) -> Result<Option<Value>> {
        let builder = self.api_request(Method::POST, "/campaigns")?.json(campaign);
        self.send_optional_data(builder, "/campaigns").await
    }

    /// PUT /api/campaigns/{id}
    pub async fn update_campaign(&self, id: i64, campaign: &Value) -> Result<Option<Value>> {
        let endpoint = format!("/campaigns/{id}");
        let builder = self.api_request(Method::PUT, &endpoint)?.json(campaign);
        self.send_optional_data(builder, &endpoint).await
    }

    /// DELETE /api/campaigns/{id}
    pub async fn delete_campaign(&self, id: i64) -> Result<bool> {
        let endpoint = format!("/campaigns/{id}");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_action(builder).await
    }

    /// Move a campaign to `scheduled` (`send_now`) or back to `draft`
    ///
    /// PUT /api/campaigns/{id}/status
    pub async fn send_campaign(&self, id: i64, send_now: bool) -> Result<bool> {
        let body = Value::Object(CampaignStatusRequest::for_send(send_now).to_payload());
        let endpoint = format!("/campaigns/{id}/status");
        let builder = self.api_request(Method::PUT, &endpoint)?.json(&body);
        self.send_action(builder).await
    }

    /// Rendered campaign body, returned as raw text
    ///
    /// GET /api/campaigns/{id}/preview
    pub async fn get_campaign_preview(&self, id: i64) -> Result<String> {
        let endpoint = format!("/campaigns/{id}/preview");
        let builder = self.api_request(Method::GET, &endpoint)?;
        let reply = self.send_reply(builder).await?;
        Ok(reply.text)
    }
}
