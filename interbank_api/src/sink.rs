//! Writes downloaded documents to disk.

use std::path::Path;

use crate::Error;

pub(crate) async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    tokio::fs::write(path, bytes).await.map_err(|e| {
        tracing::error!("Failed to write {}: {}", path.display(), e);
        Error::Io {
            message: format!("Failed to write {}: {}", path.display(), e),
            source: e,
        }
    })?;
    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
