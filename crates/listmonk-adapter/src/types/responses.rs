/*
[INPUT]:  Decoded `data` field of an API reply
[OUTPUT]: Read-only typed views with accessor methods
[POS]:    Data layer - response wrappers for API communication
[UPDATE]: When API schema changes or new accessors are needed
*/

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::http::{ListmonkError, Result};

/// Default nested key holding paginated results
pub const RESULTS_KEY: &str = "results";

/// Marker for subscriber payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscriber;

/// Marker for mailing list payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailingList;

/// Immutable typed view over one decoded JSON object.
///
/// The marker `K` selects which accessor table is available; the stored map
/// is never modified after construction.
pub struct Response<K> {
    data: Map<String, Value>,
    kind: PhantomData<K>,
}

pub type SubscriberResponse = Response<Subscriber>;
pub type ListResponse = Response<MailingList>;

impl<K> Response<K> {
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            data,
            kind: PhantomData,
        }
    }

    /// Wrap any JSON value; non-objects become an empty view
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map),
            _ => Self::new(Map::new()),
        }
    }

    /// Wrap the `data` field of a full reply envelope
    pub fn from_reply(reply: &Value) -> Self {
        Self::from_value(reply.get("data").cloned().unwrap_or(Value::Null))
    }

    /// One view per element of `data.results`, in server order
    pub fn collection_from_reply(reply: &Value) -> Vec<Self> {
        Self::collection_from_reply_with_key(reply, RESULTS_KEY)
    }

    /// One view per element of `data.<key>`, in server order
    pub fn collection_from_reply_with_key(reply: &Value, key: &str) -> Vec<Self> {
        reply
            .get("data")
            .and_then(|data| data.get(key))
            .and_then(Value::as_array)
            .map(|items| items.iter().cloned().map(Self::from_value).collect())
            .unwrap_or_default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }

    fn required(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| ListmonkError::missing_field(key))
    }

    fn required_i64(&self, key: &str) -> Result<i64> {
        self.required(key)?
            .as_i64()
            .ok_or_else(|| invalid_field(key, "expected an integer"))
    }

    fn required_str(&self, key: &str) -> Result<&str> {
        self.required(key)?
            .as_str()
            .ok_or_else(|| invalid_field(key, "expected a string"))
    }

    fn optional_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn array_or_empty(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn object_or_empty(&self, key: &str) -> Map<String, Value> {
        self.get(key)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }
}

impl Response<Subscriber> {
    pub fn id(&self) -> Result<i64> {
        self.required_i64("id")
    }

    pub fn uuid(&self) -> Result<Uuid> {
        let raw = self.required_str("uuid")?;
        Uuid::parse_str(raw).map_err(|err| invalid_field("uuid", err.to_string()))
    }

    pub fn email(&self) -> Result<&str> {
        self.required_str("email")
    }

    pub fn name(&self) -> Result<&str> {
        self.required_str("name")
    }

    pub fn status(&self) -> Result<&str> {
        self.required_str("status")
    }

    /// List memberships as returned by the server; empty when absent
    pub fn lists(&self) -> &[Value] {
        self.array_or_empty("lists")
    }

    /// Ids of the lists in [`Response::lists`]
    pub fn list_ids(&self) -> Vec<i64> {
        self.lists()
            .iter()
            .filter_map(|list| list.get("id").and_then(Value::as_i64))
            .collect()
    }

    /// Free-form attributes; empty when absent
    pub fn attributes(&self) -> Map<String, Value> {
        self.object_or_empty("attribs")
    }

    pub fn created_at(&self) -> Result<&str> {
        self.required_str("created_at")
    }

    pub fn updated_at(&self) -> Result<&str> {
        self.required_str("updated_at")
    }
}

impl Response<MailingList> {
    pub fn id(&self) -> Result<i64> {
        self.required_i64("id")
    }

    pub fn name(&self) -> Result<&str> {
        self.required_str("name")
    }

    /// `public` or `private`
    pub fn list_type(&self) -> Result<&str> {
        self.required_str("type")
    }

    pub fn description(&self) -> Option<&str> {
        self.optional_str("description")
    }

    pub fn subscriber_count(&self) -> i64 {
        self.get("subscriber_count")
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    /// Tags as a sequence. A comma-joined string is split into trimmed
    /// tokens; an array is returned as-is; missing or empty yields nothing.
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(Value::String(joined)) if !joined.is_empty() => {
                joined.split(',').map(|tag| tag.trim().to_string()).collect()
            }
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(tag) => tag.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// `single` unless the server says otherwise
    pub fn optin(&self) -> &str {
        self.optional_str("optin").unwrap_or("single")
    }

    pub fn created_at(&self) -> Result<&str> {
        self.required_str("created_at")
    }

    pub fn updated_at(&self) -> Result<&str> {
        self.required_str("updated_at")
    }
}

fn invalid_field(field: &str, reason: impl Into<String>) -> ListmonkError {
    ListmonkError::InvalidField {
        field: field.to_string(),
        reason: reason.into(),
    }
}

impl<K> fmt::Debug for Response<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response").field("data", &self.data).finish()
    }
}

impl<K> Clone for Response<K> {
    fn clone(&self) -> Self {
        Self::new(self.data.clone())
    }
}

impl<K> PartialEq for Response<K> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K> Serialize for Response<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<K> From<Map<String, Value>> for Response<K> {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}
