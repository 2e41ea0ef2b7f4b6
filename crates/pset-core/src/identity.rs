use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `pset-auth` once a session is established; carries no tokens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthIdentity {
    /// Stable user identifier (`anon-xxxxxxxxxxxxxxxx` for anonymous users).
    pub user_id: String,
    /// Whether the session came from an anonymous sign-in.
    pub anonymous: bool,
}
