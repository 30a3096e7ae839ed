//! HTTP client module for the storage service.
//!
//! This module provides the `StorageClient` for talking to a
//! token-authenticated object store: object CRUD, streamed downloads,
//! and container listings.
//!
//! The API uses short-lived tokens obtained through a credential
//! exchange against the auth endpoint; the client re-authenticates
//! transparently when a token expires or is rejected.

pub mod client;
pub mod error;
pub mod stream;

pub use client::{StorageClient, StorageClientBuilder};
pub use error::{Result, StorageError};
pub use stream::{ObjectStream, DEFAULT_CHUNK_SIZE};
