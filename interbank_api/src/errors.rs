//! Error types for the API client.

use serde_json::Value;

use crate::transport::TransportFailure;

/// Errors that can occur when talking to the banking API.
///
/// Every failure surfaced by the SDK is one of these variants. All of them
/// expose a human-readable [`message`](Error::message); transport failures
/// additionally keep the upstream error payload as an opaque JSON value in
/// [`detail`](Error::detail).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be delivered, or the API answered with a
    /// non-success status.
    #[error("{message}")]
    Transport {
        message: String,
        status: Option<u16>,
        detail: Option<Value>,
    },
    /// The response body did not match the expected shape.
    #[error("{message}")]
    Decode { message: String, body: String },
    /// A request body could not be serialized. Nothing was sent.
    #[error("{message}")]
    Encode { message: String },
    /// The SDK was configured with missing or invalid values.
    #[error("{message}")]
    Configuration { message: String },
    /// Writing a downloaded document to disk failed.
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn decode(err: impl std::fmt::Display, body: &str) -> Self {
        Self::Decode {
            message: format!("Failed to parse response: {}", err),
            body: crate::codec::truncate_body(body),
        }
    }

    /// The message carried by this error, exactly as it was produced at the
    /// point of failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message, .. }
            | Self::Decode { message, .. }
            | Self::Encode { message }
            | Self::Configuration { message }
            | Self::Io { message, .. } => message,
        }
    }

    /// The upstream error payload, when the API returned a structured body.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            Self::Transport { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }

    /// The HTTP status the API answered with, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<TransportFailure> for Error {
    fn from(failure: TransportFailure) -> Self {
        let detail = failure
            .body
            .as_deref()
            .map(str::trim)
            .filter(|body| !body.is_empty())
            .and_then(|body| serde_json::from_str::<Value>(body).ok());
        Self::Transport {
            message: failure.message,
            status: failure.status,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn transport_failure_keeps_message_and_detail() {
        let payload = json!({
            "title": "Requisição inválida",
            "detail": "Existem campos inválidos.",
            "violacoes": [{ "razao": "obrigatório", "propriedade": "valorNominal" }]
        });
        let failure = TransportFailure::new("upstream rejected the charge")
            .with_status(400)
            .with_body(payload.to_string());

        let err = Error::from(failure);

        assert_eq!(err.message(), "upstream rejected the charge");
        assert_eq!(err.to_string(), "upstream rejected the charge");
        assert_eq!(err.detail(), Some(&payload));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn plain_text_body_has_no_detail() {
        let failure = TransportFailure::from_status(502, "Bad Gateway".to_string());
        let err = Error::from(failure);
        assert_eq!(err.message(), "Request failed with status 502");
        assert!(err.detail().is_none());
    }

    #[test]
    fn network_failure_has_no_status() {
        let err = Error::from(TransportFailure::new("connection reset"));
        assert!(err.status().is_none());
        assert!(err.detail().is_none());
    }

    #[test]
    fn propagation_does_not_rewrite_the_message() {
        fn inner() -> Result<(), Error> {
            let sent: Result<String, TransportFailure> =
                Err(TransportFailure::new("token expired").with_status(401));
            sent?;
            Ok(())
        }
        fn outer() -> Result<(), Error> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err.message(), "token expired");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn configuration_error_display() {
        let err = Error::configuration("Unknown environment: staging");
        assert!(err.to_string().contains("staging"));
        assert!(err.detail().is_none());
    }
}
