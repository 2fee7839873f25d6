//! Vault token persistence

use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::client::AccessToken;
use crate::error::{Error, Result};

/// Owner read/write only
const TOKEN_FILE_MODE: u32 = 0o600;

/// Write `token` to `dest`, creating or truncating it, readable by the owner only.
pub async fn persist_token(token: &AccessToken, dest: &Path) -> Result<()> {
    let write_err = |e| Error::io("save token to", dest, e);

    let mut file = open_restricted(dest).await?;
    file.set_len(0).await.map_err(write_err)?;
    file.write_all(token.expose().as_bytes())
        .await
        .map_err(write_err)?;
    file.flush().await.map_err(write_err)?;
    file.sync_all().await.map_err(write_err)?;

    Ok(())
}

/// Open `dest` for writing and restrict it to mode 0600 on the handle.
///
/// Existing contents are left alone until the mode is in place; `mode()` only
/// covers newly created files and is filtered through the umask, so an older
/// file gets an explicit fchmod.
async fn open_restricted(dest: &Path) -> Result<tokio::fs::File> {
    let write_err = |e| Error::io("save token to", dest, e);

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(false);
    #[cfg(unix)]
    options.mode(TOKEN_FILE_MODE);

    let file = options.open(dest).await.map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(TOKEN_FILE_MODE))
            .await
            .map_err(write_err)?;
    }

    Ok(file)
}
