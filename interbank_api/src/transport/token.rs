//! Per-scope cache of OAuth access tokens.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::Scope;

/// Tokens are refreshed this long before the server-side expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Deserialize)]
pub(super) struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Default)]
pub(super) struct TokenCache {
    tokens: Mutex<HashMap<Scope, CachedToken>>,
}

impl TokenCache {
    /// Returns the cached token for `scope` if it is still valid.
    pub fn get(&self, scope: Scope) -> Option<String> {
        let tokens = self.tokens.lock().unwrap_or_else(|e| e.into_inner());
        tokens
            .get(&scope)
            .filter(|token| token.expires_at > Instant::now())
            .map(|token| token.access_token.clone())
    }

    pub fn insert(&self, scope: Scope, response: &TokenResponse) {
        let lifetime = Duration::from_secs(response.expires_in).saturating_sub(EXPIRY_MARGIN);
        let mut tokens = self.tokens.lock().unwrap_or_else(|e| e.into_inner());
        tokens.insert(
            scope,
            CachedToken {
                access_token: response.access_token.clone(),
                expires_at: Instant::now() + lifetime,
            },
        );
    }
}
