//! Fastly API interaction module
//!
//! This module provides the core functionality for talking to the Fastly
//! management API: authentication, the HTTP client, and one module per
//! configuration resource.
//!
//! # Module Structure
//!
//! - [`auth`] - API key and endpoint resolution
//! - [`client`] - Main client; URL helpers and typed request methods
//! - [`http`] - HTTP utilities for REST API calls
//! - [`error`] - Error type with a variant per missing identifier
//! - [`compat`] - Loosely typed wire decoding and form encoding helpers
//! - [`versioned`] - Generic CRUD for resources scoped to a service version
//! - resource modules: [`service`], [`version`], [`backend`], [`director`],
//!   [`director_backend`], [`health_check`], [`domain`], [`condition`],
//!   [`token`], [`user`] and the [`logging`] endpoints
//!
//! # Example
//!
//! ```no_run
//! use fastly_mgmt::fastly::{ApiKey, Client, VersionRef};
//!
//! async fn example() -> fastly_mgmt::fastly::Result<()> {
//!     let client = Client::new(ApiKey::new("my-api-key"))?;
//!     let backends = client.list_backends(&VersionRef::new("SU1Z0isxPaozGVKXdv0eY", 1)).await?;
//!     for backend in backends {
//!         println!("{} -> {:?}", backend.name, backend.address);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod backend;
pub mod client;
pub mod compat;
pub mod condition;
pub mod director;
pub mod director_backend;
pub mod domain;
pub mod error;
pub mod health_check;
pub mod http;
pub mod logging;
pub mod service;
pub mod token;
pub mod user;
pub mod version;
pub mod versioned;

pub use auth::ApiKey;
pub use client::Client;
pub use compat::Compatibool;
pub use error::{format_fastly_error, FastlyError, Result};
pub use versioned::{CreateInput, NameRef, UpdateInput, VersionRef, VersionedResource};
