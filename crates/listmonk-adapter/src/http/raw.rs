/*
[INPUT]:  HTTP method, endpoint path and JSON data
[OUTPUT]: Undecoded ApiReply for endpoints without a typed wrapper
[POS]:    HTTP layer - passthrough requests
[UPDATE]: When changing how passthrough data is encoded
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::{ApiReply, ListmonkClient, Result};

impl ListmonkClient {
    /// Send an arbitrary authenticated request under `/api/`.
    ///
    /// For `GET` the members of a `data` object become query parameters;
    /// other methods send `data` as the JSON body unless it is null or an
    /// empty object. Status handling is left to the caller.
    pub async fn request(&self, method: Method, endpoint: &str, data: &Value) -> Result<ApiReply> {
        let mut builder = self.api_request(method.clone(), endpoint)?;
        if method == Method::GET {
            let pairs = query_pairs(data);
            if !pairs.is_empty() {
                builder = builder.query(&pairs);
            }
        } else if !is_empty_data(data) {
            builder = builder.json(data);
        }
        self.send_reply(builder).await
    }
}

fn query_pairs(data: &Value) -> Vec<(String, String)> {
    let Some(map) = data.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn is_empty_data(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
