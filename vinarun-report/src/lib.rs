#![warn(missing_docs)]
//! vinarun-report - Log Aggregation and Export
//!
//! Consumes the per-round log files a docking run leaves behind and builds
//! one ordered dataset: the ranked (mode, affinity) records of each round,
//! grouped by round with a blank separator row between groups. A writer
//! serializes the dataset as a tab-separated report.
//!
//! ## Pipeline
//!
//! ```text
//! output_docking_{i}.log files
//!        │
//!        ▼
//! ┌─────────────┐
//! │    parse    │  Extract ranked poses from raw log text
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  aggregate  │  Group records by round, insert separators
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   export    │  Tab-separated report with header
//! └─────────────┘
//! ```

mod aggregate;
mod export;
mod parse;

pub use aggregate::{AffinityRecord, AggregatedDataset, ResultAggregator, Row, round_log_name};
pub use export::{export, write_tsv};
pub use parse::{LogParser, Pose, RegexLogParser};

use thiserror::Error;

/// Errors from aggregation or export.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading a log file or writing the report failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file involved
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
