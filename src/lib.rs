//! Async client for token-authenticated object storage.
//!
//! The service model is a flat `container/key` namespace behind an auth
//! endpoint that trades a username/password for a short-lived token and a
//! storage URL. Every operation here runs through the same two wrappers:
//! a bounded fixed-delay retry on the outside and a session freshness gate
//! on the inside, which re-authenticates before expiry and absorbs exactly
//! one mid-call token rejection.
//!
//! ```no_run
//! use skystash::{Credentials, ListOptions, StorageClient};
//!
//! # async fn demo() -> skystash::Result<()> {
//! let client = StorageClient::new(Credentials::new(
//!     "12345_demo",
//!     "secret",
//!     "https://auth.example.net/v1.0",
//! ))?;
//!
//! client.put("backups/2024/db.tar.gz", b"...".to_vec()).await?;
//! let payload = client.get("backups/2024/db.tar.gz").await?;
//! let entries = client.list("backups", &ListOptions::default()).await?;
//! # let _ = (payload, entries);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod path;
pub mod retry;

pub use api::{
    Result, StorageClient, StorageClientBuilder, StorageError, ObjectStream, DEFAULT_CHUNK_SIZE,
};
pub use auth::Credentials;
pub use config::Config;
pub use models::{ListOptions, ObjectEntry};
pub use path::ObjectPath;
pub use retry::RetryPolicy;

pub use bytes::Bytes;
pub use reqwest;
