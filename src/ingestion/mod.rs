//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_chain_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestOptions`])
//! - performs ingestion into an in-memory [`crate::types::Chain`]
//! - optionally reports success/failure/alerts to a [`ChainObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]
//!
//! Transport is out of scope: the upstream table feed is an HTTP JSON array,
//! but this layer only parses payloads that have already been fetched to disk
//! or memory (use [`json::ingest_json_from_str`] for in-memory payloads).

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    ChainObserver, CompositeObserver, FileObserver, IngestContext, IngestStats, Severity,
    StdErrObserver,
};
pub use unified::{ingest_chain_from_path, ChainFormat, IngestOptions};
