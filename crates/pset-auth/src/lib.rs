//! # pset-auth
//!
//! Session handling for pset.
//!
//! Every storage operation runs under a session: the stored one when it is
//! still valid, otherwise a freshly minted anonymous one (when allowed).
//! Sessions are kept as a JSON file in the project directory.

pub mod credentials;
pub mod error;
pub mod provider;
pub mod session_store;

pub use error::AuthError;
pub use provider::{LocalAuth, SessionProvider};
pub use session_store::SessionStore;
