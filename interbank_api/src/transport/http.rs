//! reqwest-backed transport with OAuth2 client-credentials and mutual TLS.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Method};

use super::token::{TokenCache, TokenResponse};
use super::{Transport, TransportFailure};
use crate::{codec::truncate_body, Config, Error, Scope};

/// Request timeout for every API call, token requests included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the OAuth token endpoint, relative to the base URL.
const TOKEN_PATH: &str = "/oauth/v2/token";

/// Header carrying the checking account a request acts on.
const ACCOUNT_HEADER: &str = "x-conta-corrente";

/// HTTP transport talking to the real API.
///
/// Builds one `reqwest::Client` up front, loading the mTLS identity when the
/// configuration names one. Access tokens are requested lazily per scope and
/// reused until shortly before they expire.
pub struct HttpTransport {
    http: reqwest::Client,
    config: Config,
    tokens: TokenCache,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("interbank/", env!("CARGO_PKG_VERSION")));

        if let Some((cert_path, key_path)) = config.identity_paths() {
            let mut pem = read_pem(cert_path)?;
            pem.push(b'\n');
            pem.extend(read_pem(key_path)?);
            let identity = reqwest::Identity::from_pem(&pem).map_err(|e| {
                tracing::error!("Failed to load client certificate: {}", e);
                Error::configuration(format!("Invalid client certificate: {}", e))
            })?;
            builder = builder.identity(identity);
        }

        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            config,
            tokens: TokenCache::default(),
        })
    }

    async fn access_token(&self, scope: Scope) -> Result<String, TransportFailure> {
        if let Some(token) = self.tokens.get(scope) {
            return Ok(token);
        }

        tracing::debug!("Requesting access token for scope {}", scope);
        let url = format!("{}{}", self.config.base_url(), TOKEN_PATH);
        let form = [
            ("client_id", self.config.client_id()),
            ("client_secret", self.config.client_secret()),
            ("scope", scope.as_str()),
            ("grant_type", "client_credentials"),
        ];
        let resp = self.http.post(&url).form(&form).send().await.map_err(|e| {
            tracing::error!("Failed to request access token: {}", e);
            TransportFailure::new(format!("Failed to request access token: {}", e))
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read token response: {}", e);
            TransportFailure::new(format!("Failed to read token response: {}", e))
        })?;
        if !status.is_success() {
            tracing::error!(
                "Token request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(TransportFailure::new(format!(
                "Token request for scope {} failed with status {}",
                scope,
                status.as_u16()
            ))
            .with_status(status.as_u16())
            .with_body(body));
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse token response: {}", e);
            TransportFailure::new(format!("Failed to parse token response: {}", e))
        })?;
        self.tokens.insert(scope, &token);
        Ok(token.access_token)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        scope: Scope,
        body: Option<String>,
    ) -> Result<String, TransportFailure> {
        let token = self.access_token(scope).await?;

        tracing::debug!("{} {}", method, url);
        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json");
        if let Some(account) = self.config.account_number() {
            request = request.header(ACCOUNT_HEADER, account);
        }
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to {} {}: {}", method, url, e);
            let failure = TransportFailure::new(format!("Failed to send request: {}", e));
            match e.status() {
                Some(status) => failure.with_status(status.as_u16()),
                None => failure,
            }
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            TransportFailure::new(format!("Failed to read response body: {}", e))
                .with_status(status.as_u16())
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(TransportFailure::from_status(status.as_u16(), body));
        }

        Ok(body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, scope: Scope) -> Result<String, TransportFailure> {
        self.send(Method::GET, url, scope, None).await
    }

    async fn post(&self, url: &str, scope: Scope, body: String) -> Result<String, TransportFailure> {
        self.send(Method::POST, url, scope, Some(body)).await
    }

    async fn put(&self, url: &str, scope: Scope, body: String) -> Result<String, TransportFailure> {
        self.send(Method::PUT, url, scope, Some(body)).await
    }

    async fn patch(
        &self,
        url: &str,
        scope: Scope,
        body: String,
    ) -> Result<String, TransportFailure> {
        self.send(Method::PATCH, url, scope, Some(body)).await
    }

    async fn delete(&self, url: &str, scope: Scope) -> Result<String, TransportFailure> {
        self.send(Method::DELETE, url, scope, None).await
    }
}

fn read_pem(path: &std::path::Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|e| Error::Io {
        message: format!("Failed to read {}: {}", path.display(), e),
        source: e,
    })
}
