//! Logging endpoints
//!
//! Each submodule is one remote log streaming destination. They all live under
//! `/service/{id}/version/{n}/logging/{kind}` and share the CRUD shape of
//! [`crate::fastly::versioned`]. Common fields:
//!
//! - `format`: Apache style log format string
//! - `format_version`: 1 or 2, the VCL logging format version
//! - `response_condition`: name of a condition gating the log line
//! - `placement`: where in the generated VCL the log statement goes

pub mod bigquery;
pub mod cloudfiles;
pub mod ftp;
pub mod gcs;
pub mod logentries;
pub mod loggly;
pub mod papertrail;
pub mod s3;
pub mod splunk;
pub mod sumologic;
pub mod syslog;

pub use bigquery::{BigQuery, BigQueryFields};
pub use cloudfiles::{Cloudfiles, CloudfilesFields};
pub use ftp::{Ftp, FtpFields};
pub use gcs::{Gcs, GcsFields};
pub use logentries::{Logentries, LogentriesFields};
pub use loggly::{Loggly, LogglyFields};
pub use papertrail::{Papertrail, PapertrailFields};
pub use s3::{S3Fields, S3Redundancy, S3};
pub use splunk::{Splunk, SplunkFields};
pub use sumologic::{Sumologic, SumologicFields};
pub use syslog::{Syslog, SyslogFields};
