//! Row selection for the options-chain table.
//!
//! The selection layer operates on [`crate::types::Chain`] values produced by
//! ingestion. It is purely in-memory and recomputes from scratch on every
//! call; there is no incremental state.
//!
//! Stages, in pipeline order:
//!
//! - [`filter_moneyness()`]: restrict rows by [`FilterMode`]
//! - [`select_window()`]: pick the balanced strike window around the reference price
//! - [`sort_by_strike()`]: stable ascending ordering of the result
//!
//! Most callers want the composed [`select_rows()`].
//!
//! ## Example
//!
//! ```rust
//! use option_chain_window::selection::{select_rows, FilterMode};
//! use option_chain_window::types::{Chain, ChainSchema, Row};
//!
//! let chain = Chain::new(
//!     ChainSchema::default(),
//!     vec![
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

pub mod filter;
pub mod order;
pub mod pipeline;
pub mod window;

pub use filter::{filter_moneyness, FilterMode};
pub use order::sort_by_strike;
pub use pipeline::select_rows;
pub use window::select_window;
