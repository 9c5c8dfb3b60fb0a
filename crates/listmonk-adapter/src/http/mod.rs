/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod bounces;
pub mod campaigns;
pub mod client;
pub mod error;
pub mod import;
pub mod lists;
pub mod maintenance;
pub mod media;
pub mod raw;
pub mod subscribers;
pub mod system;
pub mod templates;
pub mod tx;

pub use error::{ListmonkError, Result};

pub use client::{ApiReply, ClientConfig, Credentials, DEFAULT_BASE_URL, ListmonkClient};
