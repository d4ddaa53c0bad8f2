//! Resource abstraction layer
//!
//! This module provides a data-driven view over the typed Fastly client for
//! the command line. Resource kinds are defined in JSON files embedded at
//! compile time; each kind key maps to one typed resource module.
//!
//! # Architecture
//!
//! - [`registry`] - Loads and caches resource kind definitions from embedded JSON
//! - [`dispatch`] - Maps kind keys and actions to typed client calls
//! - [`render`] - Renders results as tables, JSON or YAML
//!
//! # Resource Definitions
//!
//! Kinds are defined in JSON files under `src/resources/`:
//! - `account.json` - services, versions, tokens, users
//! - `config.json` - backends, directors, health checks, domains, conditions
//! - `logging.json` - logging endpoints
//!
//! # Example
//!
//! ```no_run
//! use fastly_mgmt::fastly::{ApiKey, Client};
//! use fastly_mgmt::resource::{dispatch, get_resource, render, OutputFormat};
//!
//! async fn print_backends(client: &Client) -> anyhow::Result<()> {
//!     let ctx = dispatch::Context {
//!         service_id: Some("SU1Z0isxPaozGVKXdv0eY".into()),
//!         version: Some(1),
//!         ..Default::default()
//!     };
//!     let items = dispatch::list("backends", client, &ctx).await?;
//!     let out = render(OutputFormat::Table, get_resource("backends"), &items.into())?;
//!     println!("{}", out);
//!     Ok(())
//! }
//! ```

pub mod dispatch;
mod registry;
mod render;

pub use registry::*;
pub use render::{extract_json_value, render, render_table, OutputFormat};
