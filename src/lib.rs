//! Client SDK for the Fastly CDN management API
//!
//! [`fastly`] holds the typed client and one module per API resource;
//! [`resource`] and [`config`] back the `fastly-mgmt` command line tool.

pub mod config;
pub mod fastly;
pub mod resource;
