//! Authentication module: credentials, the sessions they buy, and the
//! header names of the token handshake.
//!
//! `Credentials` is the public entry point; sessions are created and
//! replaced internally by the client's credential exchange. They live in
//! memory only, and their lifetime is announced by the auth endpoint per
//! exchange.

pub mod credentials;
pub(crate) mod session;

pub use credentials::Credentials;
pub(crate) use session::Session;

/// Request header carrying the username on the credential exchange.
pub const AUTH_USER: &str = "X-Auth-User";

/// Request header carrying the password on the credential exchange.
pub const AUTH_KEY: &str = "X-Auth-Key";

/// Token header: a response header on the credential exchange, a request
/// header on everything after it.
pub const AUTH_TOKEN: &str = "X-Auth-Token";

/// Response header announcing the token lifetime in whole seconds.
pub const EXPIRE_AUTH_TOKEN: &str = "X-Expire-Auth-Token";

/// Response header announcing the storage endpoint the token is valid for.
pub const STORAGE_URL: &str = "X-Storage-Url";
