use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A PDF returned by the API as base64 text.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Document {
    pub pdf: String,
}

impl Document {
    /// Decodes the base64 payload into raw PDF bytes.
    pub fn bytes(&self) -> Result<Vec<u8>, Error> {
        STANDARD.decode(self.pdf.trim()).map_err(|e| {
            tracing::error!("Failed to decode PDF payload: {}", e);
            Error::Decode {
                message: format!("Failed to decode PDF payload: {}", e),
                body: crate::codec::truncate_body(&self.pdf),
            }
        })
    }
}
