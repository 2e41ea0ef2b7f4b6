//! Session credential minting.

use chrono::{DateTime, TimeDelta, Utc};
use pset_core::entities::Session;
use std::fmt::Write as _;

use crate::error::AuthError;

/// Prefix of user ids created by anonymous sign-in.
pub const ANONYMOUS_USER_PREFIX: &str = "anon-";

const USER_ID_BYTES: usize = 8;
const TOKEN_BYTES: usize = 16;

fn random_hex(len: usize) -> Result<String, AuthError> {
    let mut buf = vec![0u8; len];
    getrandom::fill(&mut buf).map_err(|e| AuthError::Entropy(e.to_string()))?;
    let mut out = String::with_capacity(len * 2);
    for byte in buf {
        let _ = write!(out, "{byte:02x}");
    }
    Ok(out)
}

/// Mint a fresh anonymous session valid for `ttl` from `now`.
///
/// # Errors
///
/// Returns `AuthError::Entropy` if the OS random source fails.
pub fn anonymous_session(now: DateTime<Utc>, ttl: TimeDelta) -> Result<Session, AuthError> {
    let user_id = format!("{ANONYMOUS_USER_PREFIX}{}", random_hex(USER_ID_BYTES)?);
    mint(user_id, true, now, ttl)
}

/// Mint a session for a named user.
///
/// # Errors
///
/// Returns `AuthError::InvalidUser` for blank ids or ids using the anonymous
/// prefix, `AuthError::Entropy` if the OS random source fails.
pub fn named_session(
    user_id: &str,
    now: DateTime<Utc>,
    ttl: TimeDelta,
) -> Result<Session, AuthError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AuthError::InvalidUser("user id must not be empty".into()));
    }
    if user_id.starts_with(ANONYMOUS_USER_PREFIX) {
        return Err(AuthError::InvalidUser(format!(
            "'{user_id}' uses the reserved '{ANONYMOUS_USER_PREFIX}' prefix"
        )));
    }
    mint(user_id.to_string(), false, now, ttl)
}

fn mint(
    user_id: String,
    anonymous: bool,
    now: DateTime<Utc>,
    ttl: TimeDelta,
) -> Result<Session, AuthError> {
    Ok(Session {
        user_id,
        token: random_hex(TOKEN_BYTES)?,
        anonymous,
        created_at: now,
        expires_at: now + ttl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_sessions_are_unique() {
        let now = Utc::now();
        let a = anonymous_session(now, TimeDelta::hours(1)).unwrap();
        let b = anonymous_session(now, TimeDelta::hours(1)).unwrap();
        assert!(a.anonymous);
        assert!(a.user_id.starts_with(ANONYMOUS_USER_PREFIX));
        assert_eq!(a.user_id.len(), ANONYMOUS_USER_PREFIX.len() + USER_ID_BYTES * 2);
        assert_eq!(a.token.len(), TOKEN_BYTES * 2);
        assert_ne!(a.user_id, b.user_id);
        assert_ne!(a.token, b.token);
        assert_eq!(a.expires_at - a.created_at, TimeDelta::hours(1));
    }

    #[test]
    fn named_session_trims_user() {
        let session = named_session("  tutor-1 ", Utc::now(), TimeDelta::hours(2)).unwrap();
        assert_eq!(session.user_id, "tutor-1");
        assert!(!session.anonymous);
    }

    #[test]
    fn named_session_rejects_blank_and_reserved() {
        let now = Utc::now();
        assert!(matches!(
            named_session("   ", now, TimeDelta::hours(1)),
            Err(AuthError::InvalidUser(_))
        ));
        assert!(matches!(
            named_session("anon-abc", now, TimeDelta::hours(1)),
            Err(AuthError::InvalidUser(_))
        ));
    }
}
