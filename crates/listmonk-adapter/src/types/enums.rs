/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    #[default]
    Enabled,
    Disabled,
}

impl SubscriberStatus {
    pub const VALUES: &'static [&'static str] = &["enabled", "disabled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberStatus::Enabled => "enabled",
            SubscriberStatus::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Public,
    Private,
}

impl ListType {
    pub const VALUES: &'static [&'static str] = &["public", "private"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Public => "public",
            ListType::Private => "private",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optin {
    #[default]
    Single,
    Double,
}

impl Optin {
    pub const VALUES: &'static [&'static str] = &["single", "double"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Optin::Single => "single",
            Optin::Double => "double",
        }
    }
}

/// Campaign lifecycle status accepted by `PUT /campaigns/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Running,
    Paused,
    Cancelled,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Running => "running",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Cancelled => "cancelled",
        }
    }
}

/// Body format of a transactional message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Html,
    Markdown,
    Plain,
}

impl ContentType {
    pub const VALUES: &'static [&'static str] = &["html", "markdown", "plain"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "html",
            ContentType::Markdown => "markdown",
            ContentType::Plain => "plain",
        }
    }
}
