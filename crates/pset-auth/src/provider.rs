use std::future::Future;
use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use pset_config::AuthConfig;
use pset_core::entities::Session;
use pset_core::responses::AuthStatusResponse;

use crate::credentials;
use crate::error::AuthError;
use crate::session_store::SessionStore;

/// Sessions expiring within this window are treated as already expired.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Establishes the session every storage call runs under.
///
/// Callers receive the provider explicitly; there is no ambient auth state.
pub trait SessionProvider: Send + Sync {
    /// Return the current session, signing in anonymously when allowed.
    fn ensure_session(&self) -> impl Future<Output = Result<Session, AuthError>> + Send;
}

impl<T: SessionProvider> SessionProvider for &T {
    fn ensure_session(&self) -> impl Future<Output = Result<Session, AuthError>> + Send {
        (**self).ensure_session()
    }
}

/// File-backed provider: reuse the stored session, otherwise mint an
/// anonymous one and persist it.
#[derive(Debug, Clone)]
pub struct LocalAuth {
    store: SessionStore,
    allow_anonymous: bool,
    ttl: TimeDelta,
}

impl LocalAuth {
    #[must_use]
    pub const fn new(store: SessionStore, allow_anonymous: bool, ttl: TimeDelta) -> Self {
        Self {
            store,
            allow_anonymous,
            ttl,
        }
    }

    /// Build from the `auth` config section for the project directory (`.pset/`).
    #[must_use]
    pub fn from_config(config: &AuthConfig, project_dir: &Path) -> Self {
        Self::new(
            SessionStore::new(config.session_file(project_dir)),
            config.allow_anonymous,
            TimeDelta::hours(i64::from(config.session_ttl_hours)),
        )
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The stored session if it is still usable at `now`.
    #[must_use]
    pub fn current_at(&self, now: DateTime<Utc>) -> Option<Session> {
        self.store
            .load()
            .filter(|s| !s.is_expired_at(now + TimeDelta::seconds(EXPIRY_BUFFER_SECS)))
    }

    /// Resolve a session as of `now`: stored one first, then anonymous sign-in.
    ///
    /// # Errors
    ///
    /// `SessionExpired` / `NotAuthenticated` when no usable session exists and
    /// anonymous sign-in is disabled; store and entropy failures otherwise.
    pub fn resolve_at(&self, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let stored = self.store.load();
        let had_expired = match stored {
            Some(session)
                if !session.is_expired_at(now + TimeDelta::seconds(EXPIRY_BUFFER_SECS)) =>
            {
                tracing::debug!(user_id = %session.user_id, "reusing stored session");
                return Ok(session);
            }
            Some(session) => {
                tracing::warn!(
                    user_id = %session.user_id,
                    expires_at = %session.expires_at,
                    "stored session expired",
                );
                true
            }
            None => false,
        };

        if !self.allow_anonymous {
            return Err(if had_expired {
                AuthError::SessionExpired
            } else {
                AuthError::NotAuthenticated
            });
        }

        let session = credentials::anonymous_session(now, self.ttl)?;
        self.store.store(&session)?;
        tracing::info!(user_id = %session.user_id, "signed in anonymously");
        Ok(session)
    }

    /// Log in. With a user id, replace any stored session with a named one;
    /// without, behave like [`SessionProvider::ensure_session`].
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_at`] and [`credentials::named_session`].
    pub fn login(&self, user_id: Option<&str>) -> Result<Session, AuthError> {
        let now = Utc::now();
        match user_id {
            Some(user_id) => {
                let session = credentials::named_session(user_id, now, self.ttl)?;
                self.store.store(&session)?;
                tracing::info!(user_id = %session.user_id, "logged in");
                Ok(session)
            }
            None => self.resolve_at(now),
        }
    }

    /// Forget the stored session. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file cannot be removed.
    pub fn logout(&self) -> Result<bool, AuthError> {
        self.store.delete()
    }

    /// Describe the stored session without signing in.
    #[must_use]
    pub fn status(&self) -> AuthStatusResponse {
        let session = self.current_at(Utc::now());
        AuthStatusResponse {
            authenticated: session.is_some(),
            user_id: session.as_ref().map(|s| s.user_id.clone()),
            anonymous: session.as_ref().map(|s| s.anonymous),
            expires_at: session.as_ref().map(|s| s.expires_at),
            session_path: self.store.path().display().to_string(),
        }
    }
}

impl SessionProvider for LocalAuth {
    fn ensure_session(&self) -> impl Future<Output = Result<Session, AuthError>> + Send {
        std::future::ready(self.resolve_at(Utc::now()))
    }
}
