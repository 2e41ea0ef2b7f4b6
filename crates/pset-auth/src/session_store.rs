use std::fs;
use std::path::{Path, PathBuf};

use pset_core::entities::Session;

use crate::error::AuthError;

/// JSON file holding the current session.
///
/// The parent directory is created with `0700` and the file written with
/// `0600` on unix.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, if any.
    ///
    /// An unreadable or corrupt file is logged and treated as "no session" so
    /// that a fresh sign-in can overwrite it.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "ignoring corrupt session file");
                None
            }
        }
    }

    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the directory or file cannot be written.
    pub fn store(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionStore(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    /// Remove the session file. Missing files are not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file exists but cannot be removed.
    pub fn delete(&self) -> Result<bool, AuthError> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(|e| {
            AuthError::SessionStore(format!("failed to delete {}: {e}", self.path.display()))
        })?;
        Ok(true)
    }
}
