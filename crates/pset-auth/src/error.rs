use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `pset auth login`")]
    NotAuthenticated,

    #[error("session expired: run `pset auth login` to start a new one")]
    SessionExpired,

    #[error("anonymous sign-in is disabled (auth.allow_anonymous = false)")]
    AnonymousDisabled,

    #[error("invalid user id: {0}")]
    InvalidUser(String),

    #[error("session store error: {0}")]
    SessionStore(String),

    #[error("could not generate session credentials: {0}")]
    Entropy(String),

    #[error("{0}")]
    Other(String),
}
