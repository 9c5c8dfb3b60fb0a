/*
[INPUT]:  List ids, filters and ListRequest payloads
[OUTPUT]: ListResponse views and action flags
[POS]:    HTTP layer - mailing list endpoints
[UPDATE]: When adding list endpoints
*/

use reqwest::Method;

use crate::http::client::validated_body;
use crate::http::{ListmonkClient, Result};
use crate::types::{ListQuery, ListRequest, ListResponse};

impl ListmonkClient {
    /// GET /api/lists?{filters}
    pub async fn get_lists(&self, filters: &ListQuery) -> Result<Vec<ListResponse>> {
        let builder = self.api_request(Method::GET, "/lists")?.query(filters);
        self.send_collection(builder).await
    }

    /// GET /api/lists/{id}
    pub async fn get_list(&self, id: i64) -> Result<Option<ListResponse>> {
        let endpoint = format!("/lists/{id}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_entity(builder, &endpoint).await
    }

    /// Create a list; `None` when the server does not answer 2xx
    ///
    /// POST /api/lists
    pub async fn create_list(&self, list: &ListRequest) -> Result<Option<ListResponse>> {
        let body = validated_body(list)?;
        let builder = self.api_request(Method::POST, "/lists")?.json(&body);
        self.send_entity(builder, "/lists").await
    }

    /// PUT /api/lists/{id}
    pub async fn update_list(&self, id: i64, list: &ListRequest) -> Result<Option<ListResponse>> {
        let body = validated_body(list)?;
        let endpoint = format!("/lists/{id}");
        let builder = self.api_request(Method::PUT, &endpoint)?.json(&body);
        self.send_entity(builder, &endpoint).await
    }

    /// DELETE /api/lists/{id}
    pub async fn delete_list(&self, id: i64) -> Result<bool> {
        let endpoint = format!("/lists/{id}");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_action(builder).await
    }
}
