/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Listmonk adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiReply,
    ClientConfig,
    Credentials,
    ListmonkClient,
    ListmonkError,
    Result,
};

// Re-export all types
pub use types::*;

// HTTP verb for `ListmonkClient::request`
pub use reqwest::Method;
