/*
[INPUT]:  Caller-supplied request fields
[OUTPUT]: Validated JSON payload maps for API mutations
[POS]:    Data layer - outbound request shapes
[UPDATE]: When API schema changes or new request shapes are added
*/

use serde_json::{Map, Value};

use super::enums::{CampaignStatus, ContentType, ListType, Optin, SubscriberStatus};
use super::validation::{FieldRules, Payload, RequestDto, Rule};

/// Create/update payload for `/subscribers`
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberRequest {
    pub email: String,
    pub name: String,
    pub status: SubscriberStatus,
    pub lists: Vec<i64>,
    pub attribs: Option<Map<String, Value>>,
    pub preconfirm_subscriptions: Option<bool>,
}

impl SubscriberRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: String::new(),
            status: SubscriberStatus::default(),
            lists: Vec::new(),
            attribs: None,
            preconfirm_subscriptions: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: SubscriberStatus) -> Self {
        self.status = status;
        self
    }

    pub fn lists(mut self, lists: impl IntoIterator<Item = i64>) -> Self {
        self.lists = lists.into_iter().collect();
        self
    }

    pub fn attribs(mut self, attribs: Map<String, Value>) -> Self {
        self.attribs = Some(attribs);
        self
    }

    pub fn preconfirm_subscriptions(mut self, preconfirm: bool) -> Self {
        self.preconfirm_subscriptions = Some(preconfirm);
        self
    }
}

impl RequestDto for SubscriberRequest {
    fn rules(&self) -> FieldRules {
        vec![
            ("email", vec![Rule::Required, Rule::Email]),
            ("name", vec![Rule::Required, Rule::String]),
            ("status", vec![Rule::Required, Rule::In(SubscriberStatus::VALUES)]),
            ("lists", vec![Rule::Required, Rule::Array, Rule::Each(&Rule::Integer)]),
            ("attribs", vec![Rule::Nullable, Rule::Object]),
            ("preconfirm_subscriptions", vec![Rule::Nullable, Rule::Boolean]),
        ]
    }

    fn to_payload(&self) -> Map<String, Value> {
        Payload::new()
            .field("email", self.email.as_str())
            .field("name", self.name.as_str())
            .field("status", self.status.as_str())
            .field("lists", self.lists.clone())
            .optional("attribs", self.attribs.clone())
            .optional("preconfirm_subscriptions", self.preconfirm_subscriptions)
            .build()
    }
}

/// Create/update payload for `/lists`
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub name: String,
    pub list_type: ListType,
    pub description: Option<String>,
    /// Comma-joined tag string
    pub tags: Option<String>,
    pub optin: Optin,
    /// Tag list; sent under `tags` in place of the string form when set
    pub tags_array: Option<Vec<String>>,
}

impl ListRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            list_type: ListType::default(),
            description: None,
            tags: None,
            optin: Optin::default(),
            tags_array: None,
        }
    }

    pub fn list_type(mut self, list_type: ListType) -> Self {
        self.list_type = list_type;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn tags_array<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags_array = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn optin(mut self, optin: Optin) -> Self {
        self.optin = optin;
        self
    }
}

impl RequestDto for ListRequest {
    fn rules(&self) -> FieldRules {
        vec![
            ("name", vec![Rule::Required, Rule::String, Rule::Max(100)]),
            ("type", vec![Rule::Required, Rule::In(ListType::VALUES)]),
            ("description", vec![Rule::Nullable, Rule::String]),
            ("tags", vec![Rule::Nullable, Rule::Each(&Rule::String)]),
            ("optin", vec![Rule::Required, Rule::In(Optin::VALUES)]),
        ]
    }

    fn to_payload(&self) -> Map<String, Value> {
        let payload = Payload::new()
            .field("name", self.name.as_str())
            .field("type", self.list_type.as_str())
            .optional("description", self.description.as_deref())
            .optional("tags", self.tags.as_deref())
            .field("optin", self.optin.as_str());

        match &self.tags_array {
            Some(tags) => payload.without("tags").field("tags", tags.clone()).build(),
            None => payload.build(),
        }
    }
}

/// Payload for `POST /tx`
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionalRequest {
    pub subscriber_email: String,
    /// `0` sends `body` as-is instead of rendering a stored template
    pub template_id: i64,
    pub from_email: Option<String>,
    pub from_name: Option<String>,
    pub subject: String,
    pub body: String,
    pub content_type: ContentType,
    pub messenger: String,
    /// Extra keys merged over the top-level body
    pub extra: Map<String, Value>,
}

impl TransactionalRequest {
    pub fn new(
        subscriber_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            subscriber_email: subscriber_email.into(),
            template_id: 0,
            from_email: None,
            from_name: None,
            subject: subject.into(),
            body: body.into(),
            content_type: ContentType::default(),
            messenger: "email".to_string(),
            extra: Map::new(),
        }
    }

    pub fn template_id(mut self, template_id: i64) -> Self {
        self.template_id = template_id;
        self
    }

    pub fn sender(mut self, email: impl Into<String>, name: Option<String>) -> Self {
        self.from_email = Some(email.into());
        self.from_name = name;
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn messenger(mut self, messenger: impl Into<String>) -> Self {
        self.messenger = messenger.into();
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl RequestDto for TransactionalRequest {
    fn rules(&self) -> FieldRules {
        // a stored template supplies subject and body server-side
        let content = if self.template_id == 0 {
            Rule::Required
        } else {
            Rule::Nullable
        };
        vec![
            ("subscriber_email", vec![Rule::Required, Rule::Email]),
            ("template_id", vec![Rule::Required, Rule::Integer]),
            ("from_email", vec![Rule::Nullable, Rule::String]),
            ("from_name", vec![Rule::Nullable, Rule::String]),
            ("subject", vec![content, Rule::String]),
            ("body", vec![content, Rule::String]),
            ("content_type", vec![Rule::Required, Rule::In(ContentType::VALUES)]),
            ("messenger", vec![Rule::Required, Rule::String]),
        ]
    }

    fn to_payload(&self) -> Map<String, Value> {
        let mut payload = Payload::new()
            .field("subscriber_email", self.subscriber_email.as_str())
            .field("template_id", self.template_id)
            .optional("from_email", self.from_email.as_deref())
            .optional("from_name", self.from_name.as_deref())
            .field("subject", self.subject.as_str())
            .field("body", self.body.as_str())
            .field("content_type", self.content_type.as_str())
            .field("messenger", self.messenger.as_str());

        for (key, value) in &self.extra {
            payload = payload.field(key, value.clone());
        }
        payload.build()
    }
}

/// Payload for `PUT /campaigns/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignStatusRequest {
    pub status: CampaignStatus,
    pub send_later: bool,
}

impl CampaignStatusRequest {
    /// `send_now` schedules the campaign; otherwise it is parked as a draft
    /// flagged for later sending.
    pub fn for_send(send_now: bool) -> Self {
        Self {
            status: if send_now {
                CampaignStatus::Scheduled
            } else {
                CampaignStatus::Draft
            },
            send_later: !send_now,
        }
    }
}

impl RequestDto for CampaignStatusRequest {
    fn rules(&self) -> FieldRules {
        vec![
            (
                "status",
                vec![
                    Rule::Required,
                    Rule::In(&["draft", "scheduled", "running", "paused", "cancelled"]),
                ],
            ),
            ("send_later", vec![Rule::Required, Rule::Boolean]),
        ]
    }

    fn to_payload(&self) -> Map<String, Value> {
        Payload::new()
            .field("status", self.status.as_str())
            .field("send_later", self.send_later)
            .build()
    }
}

/// Payload for `PUT /subscribers/blocklist`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistRequest {
    pub ids: Vec<i64>,
}

impl BlocklistRequest {
    pub fn new(ids: &[i64]) -> Self {
        Self { ids: ids.to_vec() }
    }
}

impl RequestDto for BlocklistRequest {
    fn rules(&self) -> FieldRules {
        vec![
            ("id", vec![Rule::Required, Rule::Array, Rule::Each(&Rule::Integer)]),
            ("action", vec![Rule::Required, Rule::In(&["blocklist"])]),
        ]
    }

    fn to_payload(&self) -> Map<String, Value> {
        Payload::new()
            .field("id", self.ids.clone())
            .field("action", "blocklist")
            .build()
    }
}

/// Payload for `POST /maintenance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceRequest {
    pub tasks: Vec<String>,
}

impl MaintenanceRequest {
    pub fn new<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }
}

impl RequestDto for MaintenanceRequest {
    fn rules(&self) -> FieldRules {
        vec![("tasks", vec![Rule::Required, Rule::Array, Rule::Each(&Rule::String)])]
    }

    fn to_payload(&self) -> Map<String, Value> {
        Payload::new().field("tasks", self.tasks.clone()).build()
    }
}

/// `params` field of a subscriber import upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImportParams {
    /// `subscribe` or `blocklist`
    pub mode: String,
    /// `unconfirmed`, `confirmed` or `unsubscribed`
    pub subscription_status: Option<String>,
    pub delim: String,
    pub lists: Vec<i64>,
    pub overwrite: bool,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            mode: "subscribe".to_string(),
            subscription_status: None,
            delim: ",".to_string(),
            lists: Vec::new(),
            overwrite: false,
        }
    }
}

impl RequestDto for ImportParams {
    fn rules(&self) -> FieldRules {
        vec![
            ("mode", vec![Rule::Required, Rule::In(&["subscribe", "blocklist"])]),
            (
                "subscription_status",
                vec![
                    Rule::Nullable,
                    Rule::In(&["unconfirmed", "confirmed", "unsubscribed"]),
                ],
            ),
            ("delim", vec![Rule::Required, Rule::String, Rule::Max(1)]),
            ("lists", vec![Rule::Array, Rule::Each(&Rule::Integer)]),
            ("overwrite", vec![Rule::Required, Rule::Boolean]),
        ]
    }

    fn to_payload(&self) -> Map<String, Value> {
        Payload::new()
            .field("mode", self.mode.as_str())
            .optional("subscription_status", self.subscription_status.as_deref())
            .field("delim", self.delim.as_str())
            .field("lists", self.lists.clone())
            .field("overwrite", self.overwrite)
            .build()
    }
}
