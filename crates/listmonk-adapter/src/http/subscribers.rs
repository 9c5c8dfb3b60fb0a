/*
[INPUT]:  Subscriber ids, filters and SubscriberRequest payloads
[OUTPUT]: SubscriberResponse views and action flags
[POS]:    HTTP layer - subscriber endpoints
[UPDATE]: When adding subscriber endpoints or changing failure policy
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::client::{join_ids, validated_body};
use crate::http::{ListmonkClient, Result};
use crate::types::{
    BlocklistRequest, RequestDto, SubscriberQuery, SubscriberRequest, SubscriberResponse,
};

impl ListmonkClient {
    /// Query subscribers
    ///
    /// GET /api/subscribers?{filters}
    pub async fn get_subscribers(&self, filters: &SubscriberQuery) -> Result<Vec<SubscriberResponse>> {
        let builder = self.api_request(Method::GET, "/subscribers")?.query(filters);
        self.send_collection(builder).await
    }

    /// Fetch one subscriber; `None` when the server does not answer 2xx
    ///
    /// GET /api/subscribers/{id}
    pub async fn get_subscriber(&self, id: i64) -> Result<Option<SubscriberResponse>> {
        let endpoint = format!("/subscribers/{id}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_entity(builder, &endpoint).await
    }

    /// Create a subscriber.
    ///
    /// Unlike the other single-entity writes, a non-2xx reply is returned as
    /// [`crate::ListmonkError::Api`] instead of `None`.
    ///
    /// POST /api/subscribers
    pub async fn create_subscriber(&self, subscriber: &SubscriberRequest) -> Result<SubscriberResponse> {
        let body = validated_body(subscriber)?;
        let builder = self.api_request(Method::POST, "/subscribers")?.json(&body);
        self.send_entity_strict(builder).await
    }

    /// Update a subscriber. Non-2xx replies are errors, as with
    /// [`ListmonkClient::create_subscriber`].
    ///
    /// PUT /api/subscribers/{id}
    pub async fn update_subscriber(
        &self,
        id: i64,
        subscriber: &SubscriberRequest,
    ) -> Result<SubscriberResponse> {
        let body = validated_body(subscriber)?;
        let endpoint = format!("/subscribers/{id}");
        let builder = self.api_request(Method::PUT, &endpoint)?.json(&body);
        self.send_entity_strict(builder).await
    }

    /// DELETE /api/subscribers/{id}
    pub async fn delete_subscriber(&self, id: i64) -> Result<bool> {
        let endpoint = format!("/subscribers/{id}");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_action(builder).await
    }

    /// Delete several subscribers at once
    ///
    /// DELETE /api/subscribers with body `{"id": "1,2,3"}`
    pub async fn delete_subscribers(&self, ids: &[i64]) -> Result<bool> {
        let body = json!({ "id": join_ids(ids) });
        let builder = self.api_request(Method::DELETE, "/subscribers")?.json(&body);
        self.send_action(builder).await
    }

    /// PUT /api/subscribers/{id}/blocklist
    pub async fn blocklist_subscriber(&self, id: i64) -> Result<bool> {
        let endpoint = format!("/subscribers/{id}/blocklist");
        let builder = self.api_request(Method::PUT, &endpoint)?;
        self.send_action(builder).await
    }

    /// Blocklist several subscribers at once
    ///
    /// PUT /api/subscribers/blocklist
    pub async fn blocklist_subscribers(&self, ids: &[i64]) -> Result<bool> {
        let body = Value::Object(BlocklistRequest::new(ids).to_payload());
        let builder = self
            .api_request(Method::PUT, "/subscribers/blocklist")?
            .json(&body);
        self.send_action(builder).await
    }

    /// Send the opt-in confirmation mail to a subscriber
    ///
    /// POST /api/subscribers/{id}/optin
    pub async fn send_optin(&self, id: i64) -> Result<bool> {
        let endpoint = format!("/subscribers/{id}/optin");
        let builder = self.api_request(Method::POST, &endpoint)?;
        self.send_action(builder).await
    }
}
