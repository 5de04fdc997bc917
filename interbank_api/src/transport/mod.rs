//! The raw HTTP collaborator the SDK sends every request through.

use async_trait::async_trait;

use crate::Scope;

mod http;
mod token;

pub use self::http::HttpTransport;

/// A failed exchange with the API, before it is turned into an [`crate::Error`].
#[derive(Clone, Debug)]
pub struct TransportFailure {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Raw response body, when a response was received.
    pub body: Option<String>,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// A non-success response with the given status and body.
    pub fn from_status(status: u16, body: String) -> Self {
        Self::new(format!("Request failed with status {}", status))
            .with_status(status)
            .with_body(body)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends authorized requests and returns the raw response body.
///
/// Each call performs exactly one logical request; implementations must not
/// retry. `scope` names the permission the request is authorized under.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, scope: Scope) -> Result<String, TransportFailure>;

    async fn post(&self, url: &str, scope: Scope, body: String) -> Result<String, TransportFailure>;

    async fn put(&self, url: &str, scope: Scope, body: String) -> Result<String, TransportFailure>;

    async fn patch(&self, url: &str, scope: Scope, body: String)
        -> Result<String, TransportFailure>;

    async fn delete(&self, url: &str, scope: Scope) -> Result<String, TransportFailure>;
}
