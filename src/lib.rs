//! `option-chain-window` is a small library for turning a priced options-chain
//! dataset into the window of rows an option table actually displays: the
//! strikes nearest the underlying price, balanced across both sides of it,
//! optionally restricted to in- or out-of-the-money positions.
//!
//! The primary entrypoint is [`selection::select_rows`], a pure function the
//! surrounding application re-invokes whenever the dataset, the requested row
//! count, or the moneyness filter changes. Fetching, rendering, pagination,
//! and styling all live outside this crate; it takes a [`types::Chain`] in and
//! hands a [`types::Chain`] back out.
//!
//! ## Selection
//!
//! The selector partitions the (filtered) chain around the reference price,
//! takes the nearest `floor(n/2)` strikes from each side, and returns the
//! union sorted ascending by strike. Odd counts round down (a count of 5
//! yields 4 rows) and a side that runs out of strikes is not back-filled from
//! the other; both quirks match the production table and are covered by tests.
//!
//! ```rust
//! use option_chain_window::selection::{select_rows, FilterMode};
//! use option_chain_window::types::{Chain, ChainSchema, Row};
//!
//! // Strike + signed moneyness; extra columns ride along untouched.
//! let chain = Chain::new(
//!     ChainSchema::default(),
//!     vec![
//!         Row::new(200.0, -6.7),
//!         Row::new(205.0, -4.3),
//!         Row::new(210.0, -2.0),
//!         Row::new(215.0, 0.3),
//!         Row::new(220.0, 2.7),
//!         Row::new(225.0, 5.0),
//!     ],
//! );
//!
//! let out = select_rows(&chain, 214.29, 4, FilterMode::All).unwrap();
//! let strikes: Vec<f64> = out.rows.iter().map(|r| r.strike).collect();
//! assert_eq!(strikes, vec![205.0, 210.0, 215.0, 220.0]);
//! ```
//!
//! ## Ingestion
//!
//! [`ingestion::ingest_chain_from_path`] parses a fetched payload (JSON
//! array-of-objects, NDJSON, or CSV, auto-detected by extension) into a
//! [`types::Chain`]. The two columns the selector depends on are named by a
//! [`types::ChainSchema`] (defaults match the upstream feed); every other
//! numeric column is carried through as an opaque extra attribute.
//!
//! ```no_run
//! use option_chain_window::ingestion::{ingest_chain_from_path, IngestOptions};
//! use option_chain_window::types::ChainSchema;
//!
//! # fn main() -> Result<(), option_chain_window::ChainError> {
//! let chain = ingest_chain_from_path(
//!     "table_data.json",
//!     &ChainSchema::default(),
//!     &IngestOptions::default(),
//! )?;
//! println!("rows={}", chain.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! Malformed input is rejected, never coerced: a missing required column is a
//! [`ChainError::SchemaMismatch`], a non-numeric (or non-finite) cell is a
//! [`ChainError::MalformedRow`], and a non-finite reference price handed to
//! the selector is a [`ChainError::Configuration`]. Empty datasets and a row
//! count of zero are not errors; they select nothing.
//!
//! ## Modules
//!
//! - [`selection`]: moneyness filter, balanced strike window, strike ordering
//! - [`ingestion`]: CSV/JSON ingestion with observer-based outcome reporting
//! - [`export`]: JSON/CSV serialization of a chain for downstream renderers
//! - [`types`]: schema + in-memory chain types
//! - [`error`]: the shared error enum

pub mod error;
pub mod export;
pub mod ingestion;
pub mod selection;
pub mod types;

pub use error::{ChainError, ChainResult};
pub use selection::{select_rows, FilterMode};
pub use types::{Chain, ChainSchema, Row};
