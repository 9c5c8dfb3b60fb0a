/*
[INPUT]:  HTTP configuration (base URL, credentials, timeouts)
[OUTPUT]: Configured reqwest client and decoded reply envelopes
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::env;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{ListmonkError, Result};
use crate::types::{RequestDto, Response};

/// Default Listmonk installation address
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Path namespace every endpoint lives under
const API_PREFIX: &str = "api/";

const DEFAULT_USER_AGENT: &str = concat!("listmonk-adapter/", env!("CARGO_PKG_VERSION"));

/// API user credentials sent as `Authorization: token <username>:<password>`
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("token {}:{}", self.username, self.password)
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration for a server at `base_url` with the given credentials
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            ..Self::default()
        }
    }

    /// Read `LISTMONK_URL`, `LISTMONK_USERNAME`, `LISTMONK_PASSWORD` and
    /// `LISTMONK_TIMEOUT` (seconds), falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env()
    }

    /// Override fields with any `LISTMONK_*` variables that are set
    pub fn merge_env(mut self) -> Result<Self> {
        if let Ok(base_url) = env::var("LISTMONK_URL") {
            self.base_url = base_url;
        }
        if let Ok(username) = env::var("LISTMONK_USERNAME") {
            self.credentials.username = username;
        }
        if let Ok(password) = env::var("LISTMONK_PASSWORD") {
            self.credentials.password = password;
        }
        if let Ok(timeout) = env::var("LISTMONK_TIMEOUT") {
            let seconds: u64 = timeout.trim().parse().map_err(|_| {
                ListmonkError::Config(format!("LISTMONK_TIMEOUT must be whole seconds, got {timeout:?}"))
            })?;
            self.timeout = Duration::from_secs(seconds);
        }
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One decoded API reply.
///
/// Listmonk wraps every payload as `{"data": ...}`. A body that is not JSON
/// decodes to `Value::Null`, so it reads the same as a reply without `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: StatusCode,
    pub text: String,
    pub body: Value,
}

impl ApiReply {
    pub fn new(status: StatusCode, text: String) -> Self {
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `data` field, when present and not null
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data").filter(|data| !data.is_null())
    }

    /// `true` only when `data` is exactly the JSON boolean `true`
    pub fn data_is_true(&self) -> bool {
        matches!(self.data(), Some(Value::Bool(true)))
    }

    pub fn into_data(self) -> Option<Value> {
        match self.body {
            Value::Object(mut map) => map.remove("data").filter(|data| !data.is_null()),
            _ => None,
        }
    }

    pub fn into_data_or(self, default: Value) -> Value {
        self.into_data().unwrap_or(default)
    }
}

/// HTTP client for the Listmonk REST API
#[derive(Debug, Clone)]
pub struct ListmonkClient {
    http_client: Client,
    api_base_url: Url,
    timeout: Duration,
}

impl ListmonkClient {
    /// Create a client against the default local server
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create a client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&config.credentials.authorization())
            .map_err(|err| ListmonkError::Config(format!("invalid credentials header: {err}")))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let api_base_url = api_base_url(&config.base_url)?;

        Ok(Self {
            http_client,
            api_base_url,
            timeout: config.timeout,
        })
    }

    /// Root of the API namespace (`{base_url}/api/`)
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build full URL for an endpoint relative to the API root
    pub(crate) fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.api_base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder for an API endpoint
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        debug!(method = %method, endpoint, "listmonk request");
        Ok(self.http_client.request(method, url))
    }

    /// Execute a request and decode the reply envelope.
    ///
    /// Only transport failures are errors here; status handling is left to
    /// the caller.
    pub(crate) async fn send_reply(&self, builder: RequestBuilder) -> Result<ApiReply> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "listmonk response");
        Ok(ApiReply::new(status, text))
    }

    /// Action endpoints: `true` iff `data` is exactly `true`, whatever the status
    pub(crate) async fn send_action(&self, builder: RequestBuilder) -> Result<bool> {
        let reply = self.send_reply(builder).await?;
        Ok(reply.data_is_true())
    }

    /// Server-defined shapes: the raw `data` value or `default`
    pub(crate) async fn send_data(&self, builder: RequestBuilder, default: Value) -> Result<Value> {
        let reply = self.send_reply(builder).await?;
        Ok(reply.into_data_or(default))
    }

    /// Single raw entity: `None` on a non-2xx status or missing `data`
    pub(crate) async fn send_optional_data(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
    ) -> Result<Option<Value>> {
        let reply = self.send_reply(builder).await?;
        if !reply.is_success() {
            warn!(endpoint, status = reply.status.as_u16(), "listmonk request unsuccessful");
            return Ok(None);
        }
        Ok(reply.into_data())
    }

    /// Single typed entity: `None` on a non-2xx status
    pub(crate) async fn send_entity<K>(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
    ) -> Result<Option<Response<K>>> {
        let reply = self.send_reply(builder).await?;
        if !reply.is_success() {
            warn!(endpoint, status = reply.status.as_u16(), "listmonk request unsuccessful");
            return Ok(None);
        }
        Ok(Some(Response::from_reply(&reply.body)))
    }

    /// Single typed entity: a non-2xx status is an [`ListmonkError::Api`] error
    pub(crate) async fn send_entity_strict<K>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Response<K>> {
        let reply = self.send_reply(builder).await?;
        if !reply.is_success() {
            return Err(ListmonkError::api_error(reply.status, reply.text));
        }
        Ok(Response::from_reply(&reply.body))
    }

    /// Paginated endpoints: one view per `data.results` element
    pub(crate) async fn send_collection<K>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Vec<Response<K>>> {
        let reply = self.send_reply(builder).await?;
        Ok(Response::collection_from_reply(&reply.body))
    }
}

/// Validate a request DTO and turn it into its JSON body
pub(crate) fn validated_body(dto: &dyn RequestDto) -> Result<Value> {
    if let Err(errors) = dto.validate() {
        debug!(fields = ?errors.fields(), "request validation failed");
        return Err(errors.into());
    }
    Ok(Value::Object(dto.to_payload()))
}

/// Comma-joined id list used by the bulk delete endpoints
pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn api_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ListmonkError::Config("base URL must not be empty".to_string()));
    }
    Ok(Url::parse(&format!("{trimmed}/{API_PREFIX}"))?)
}
