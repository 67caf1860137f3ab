//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_chain_from_path`], which ingests a file
//! into an in-memory [`crate::types::Chain`] using a [`ChainSchema`].
//!
//! - If [`IngestOptions::format`] is `None`, the format is inferred from the
//!   file extension.
//! - If a [`ChainObserver`] is provided, success/failure/alerts are reported
//!   to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ChainError, ChainResult};
use crate::types::{Chain, ChainSchema};

use super::observability::{ChainObserver, IngestContext, IngestStats, Severity};
use super::{csv, json};

/// Supported chain-ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFormat {
    /// Comma-separated values.
    Csv,
    /// JSON array-of-objects or NDJSON.
    Json,
}

impl ChainFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct IngestOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<ChainFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ChainObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    ///
    /// `None` disables alerting entirely.
    pub alert_at_or_above: Option<Severity>,
}

impl fmt::Debug for IngestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Unified ingestion entry point for path-based chain sources.
///
/// - If `options.format` is `None`, format is inferred from the file extension
///   (`.csv`, `.json`, `.ndjson`).
/// - When an observer is configured, reports `on_success` with row/strike
///   stats, `on_failure` with a computed severity, and `on_alert` when that
///   severity reaches `options.alert_at_or_above`.
///
/// # Examples
///
/// ```no_run
/// use option_chain_window::ingestion::{ingest_chain_from_path, IngestOptions};
/// use option_chain_window::types::ChainSchema;
///
/// # fn main() -> Result<(), option_chain_window::ChainError> {
/// // Uses `.json` to select JSON ingestion; default schema expects the
/// // upstream `strike` / `percent_in_out_money` columns.
/// let chain = ingest_chain_from_path("table_data.json", &ChainSchema::default(), &IngestOptions::default())?;
/// println!("rows={}", chain.row_count());
/// # Ok(())
/// # }
/// ```
///
/// With stderr logging and alerting on critical failures:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use option_chain_window::ingestion::{
///     ingest_chain_from_path, IngestOptions, Severity, StdErrObserver,
/// };
/// use option_chain_window::types::ChainSchema;
///
/// # fn main() -> Result<(), option_chain_window::ChainError> {
/// let opts = IngestOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: Some(Severity::Critical),
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert` here.
/// let _err = ingest_chain_from_path("does_not_exist.csv", &ChainSchema::default(), &opts).unwrap_err();
/// # Ok(())
/// # }
/// ```
pub fn ingest_chain_from_path(
    path: impl AsRef<Path>,
    schema: &ChainSchema,
    options: &IngestOptions,
) -> ChainResult<Chain> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let result = match fmt {
        ChainFormat::Csv => csv::ingest_csv_from_path(path, schema),
        ChainFormat::Json => json::ingest_json_from_path(path, schema),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(chain) => obs.on_success(&ctx, stats_for_chain(chain)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if options.alert_at_or_above.is_some_and(|threshold| sev >= threshold) {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn stats_for_chain(chain: &Chain) -> IngestStats {
    let mut span: Option<(f64, f64)> = None;
    let mut itm_rows = 0;
    for row in &chain.rows {
        span = Some(match span {
            Some((lo, hi)) => (lo.min(row.strike), hi.max(row.strike)),
            None => (row.strike, row.strike),
        });
        if row.moneyness >= 0.0 {
            itm_rows += 1;
        }
    }
    IngestStats {
        rows: chain.row_count(),
        strike_span: span,
        itm_rows,
    }
}

fn severity_for_error(e: &ChainError) -> Severity {
    match e {
        ChainError::Io(_) => Severity::Critical,
        ChainError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        ChainError::SchemaMismatch { .. } => Severity::Error,
        ChainError::MalformedRow { .. } => Severity::Error,
        ChainError::Configuration { .. } => Severity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> ChainResult<ChainFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ChainError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    ChainFormat::from_extension(ext).ok_or_else(|| ChainError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}
