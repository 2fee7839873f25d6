//! Service account token loading

use std::path::Path;

use crate::error::{Error, Result};

/// Read the service account JWT at `path`, trimming surrounding whitespace.
///
/// The token's structure is not checked here; Vault validates it at login.
pub async fn load_identity_token(path: &Path) -> Result<String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io("read identity token from", path, e))?;

    let token = contents.trim();
    if token.is_empty() {
        return Err(Error::io(
            "read identity token from",
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, "token file is empty"),
        ));
    }

    Ok(token.to_string())
}
