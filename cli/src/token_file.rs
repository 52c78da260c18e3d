//! File-backed token store: the CLI's equivalent of the browser cookie.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use taskdeck::{ApiError, TokenStore};

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw.trim().to_owned()).filter(|token| !token.is_empty()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "token file unreadable");
                None
            }
        }
    }

    fn store(&self, token: &str) -> Result<(), ApiError> {
        write_private(&self.path, token).map_err(|e| ApiError::Storage(format!("{}: {e}", self.path.display())))
    }

    fn clear(&self) -> Result<(), ApiError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                Err(ApiError::Storage(format!("{}: {e}", self.path.display())))
            }
            _ => Ok(()),
        }
    }
}

/// Write `contents` readable by the owner only (0600 on Unix), tightening
/// the mode of a file that already exists.
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents.as_bytes())
}

#[cfg(test)]
#[path = "token_file_test.rs"]
mod tests;
