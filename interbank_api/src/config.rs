//! Client identity, credentials and environment selection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use url::Url;

use crate::Error;

/// Which deployment of the API to talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Production,
    /// The homologation environment. This is the default.
    #[default]
    Sandbox,
}

impl Environment {
    /// Base URL of the API for this environment, without a trailing slash.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://cdpj.partners.bancointer.com.br",
            Environment::Sandbox => "https://cdpj-sandbox.partners.uatinter.co",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Production => "production",
                Environment::Sandbox => "sandbox",
            }
        )
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "sandbox" | "uat" => Ok(Environment::Sandbox),
            other => Err(Error::configuration(format!("Unknown environment: {}", other))),
        }
    }
}

/// Immutable SDK configuration, resolved once per client.
#[derive(Clone)]
pub struct Config {
    client_id: String,
    client_secret: String,
    certificate_path: Option<PathBuf>,
    key_path: Option<PathBuf>,
    account_number: Option<String>,
    environment: Environment,
    /// Overrides the environment's base URL. Used for testing with wiremock.
    base_url: Option<String>,
}

impl Config {
    pub fn new(client_id: &str, client_secret: &str, environment: Environment) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            certificate_path: None,
            key_path: None,
            account_number: None,
            environment,
            base_url: None,
        }
    }

    /// Reads the configuration from `INTER_*` environment variables.
    ///
    /// `INTER_CLIENT_ID` and `INTER_CLIENT_SECRET` are required. The mTLS
    /// pair `INTER_CERT_PATH`/`INTER_KEY_PATH` must be set together.
    /// `INTER_ENVIRONMENT` defaults to the sandbox.
    pub fn from_env() -> Result<Self, Error> {
        let environment = match env_var("INTER_ENVIRONMENT") {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };
        let client_id = env_var("INTER_CLIENT_ID")
            .ok_or_else(|| Error::configuration("INTER_CLIENT_ID is not set"))?;
        let client_secret = env_var("INTER_CLIENT_SECRET")
            .ok_or_else(|| Error::configuration("INTER_CLIENT_SECRET is not set"))?;

        let mut config = Config::new(&client_id, &client_secret, environment);
        match (env_var("INTER_CERT_PATH"), env_var("INTER_KEY_PATH")) {
            (Some(cert), Some(key)) => config = config.with_certificate(cert, key),
            (None, None) => {}
            _ => {
                return Err(Error::configuration(
                    "INTER_CERT_PATH and INTER_KEY_PATH must be set together",
                ))
            }
        }
        if let Some(account) = env_var("INTER_ACCOUNT_NUMBER") {
            config = config.with_account_number(&account);
        }
        Ok(config)
    }

    /// Sets the PEM certificate and private key used for mutual TLS.
    pub fn with_certificate(mut self, certificate: impl Into<PathBuf>, key: impl Into<PathBuf>) -> Self {
        self.certificate_path = Some(certificate.into());
        self.key_path = Some(key.into());
        self
    }

    /// Sets the checking account requests are made on behalf of.
    pub fn with_account_number(mut self, account_number: &str) -> Self {
        self.account_number = Some(account_number.to_string());
        self
    }

    /// Points the client at a custom base URL instead of the environment's.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::configuration(format!("Invalid base URL {}: {}", base_url, e))
        })?;
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        Ok(self)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// The certificate/key pair for mutual TLS, when configured.
    pub fn identity_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.certificate_path, &self.key_path) {
            (Some(cert), Some(key)) => Some((cert.as_path(), key.as_path())),
            _ => None,
        }
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("certificate_path", &self.certificate_path)
            .field("key_path", &self.key_path)
            .field("account_number", &self.account_number)
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_urls() {
        assert_eq!(
            Environment::Production.base_url(),
            "https://cdpj.partners.bancointer.com.br"
        );
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://cdpj-sandbox.partners.uatinter.co"
        );
    }

    #[test]
    fn environment_from_str() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        let err = "staging".parse::<Environment>().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(err.message(), "Unknown environment: staging");
    }

    #[test]
    fn base_url_override() {
        let config = Config::new("id", "secret", Environment::Production)
            .with_base_url("http://127.0.0.1:8080/")
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");

        let config = Config::new("id", "secret", Environment::Production);
        assert_eq!(config.base_url(), Environment::Production.base_url());
    }

    #[test]
    fn invalid_base_url_is_configuration_error() {
        let result = Config::new("id", "secret", Environment::Sandbox).with_base_url("not a url");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn debug_redacts_secret() {
        let config = Config::new("id", "super-secret", Environment::Sandbox);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn identity_paths_require_both() {
        let config = Config::new("id", "secret", Environment::Sandbox);
        assert!(config.identity_paths().is_none());
        let config = config.with_certificate("cert.crt", "cert.key");
        let (cert, key) = config.identity_paths().unwrap();
        assert_eq!(cert, Path::new("cert.crt"));
        assert_eq!(key, Path::new("cert.key"));
    }
}
