//! Result aggregation
//!
//! Scans a directory for per-round log files named by the fixed
//! `output_docking_{i}.log` convention and assembles one ordered dataset.
//! Rounds whose log is absent are skipped entirely; rounds whose log
//! exists contribute their records followed by one separator row. The
//! aggregator has no memory of prior runs, it reads whatever files exist
//! at the moment it is called.

use crate::ReportError;
use crate::parse::{LogParser, RegexLogParser};
use std::path::Path;

/// A ranked pose together with its display-level round label.
///
/// The label is the round number as text on the first record of the
/// round's group and an empty string on every record after it. That is a
/// display convention for the report, not a semantic null.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityRecord {
    /// Round label (number on the first record of a group, empty after)
    pub round: String,
    /// 1-based rank assigned by the engine
    pub mode: u32,
    /// Estimated binding energy
    pub affinity: f64,
}

/// One row of the aggregated dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// A ranked pose from one round
    Record(AffinityRecord),
    /// Blank row marking a group boundary
    Separator,
}

/// Ordered, grouped records across all rounds of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedDataset {
    /// Rows in round order; records within a round keep the log's own
    /// ranked order
    pub rows: Vec<Row>,
}

impl AggregatedDataset {
    /// Whether the dataset holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The records in the dataset, skipping separators.
    pub fn records(&self) -> impl Iterator<Item = &AffinityRecord> {
        self.rows.iter().filter_map(|row| match row {
            Row::Record(rec) => Some(rec),
            Row::Separator => None,
        })
    }
}

/// Expected log filename for a round, fixed by convention.
///
/// The runner names logs `{output_prefix}_{i}.log`, so the two stages only
/// interoperate when the prefix is configured as `output_docking` relative
/// to the directory handed to [`ResultAggregator::aggregate`].
pub fn round_log_name(round: u32) -> String {
    format!("output_docking_{round}.log")
}

/// Builds an [`AggregatedDataset`] from a directory of per-round logs.
pub struct ResultAggregator<P = RegexLogParser> {
    parser: P,
}

impl ResultAggregator<RegexLogParser> {
    /// Aggregator with the stock regex parser.
    pub fn new() -> Self {
        Self {
            parser: RegexLogParser::new(),
        }
    }
}

impl Default for ResultAggregator<RegexLogParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: LogParser> ResultAggregator<P> {
    /// Aggregator with a caller-supplied parser.
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Scan `directory` for rounds `1..=num_rounds` and build the dataset.
    ///
    /// A missing log file skips its round with no row and no separator. A
    /// present log contributes its records, the first one carrying the
    /// round label, then exactly one separator row. The separator is tied
    /// to the file having been read, not to it having produced records.
    pub fn aggregate(
        &self,
        directory: &Path,
        num_rounds: u32,
    ) -> Result<AggregatedDataset, ReportError> {
        let mut rows = Vec::new();

        for round in 1..=num_rounds {
            let path = directory.join(round_log_name(round));
            if !path.is_file() {
                tracing::debug!(round, path = %path.display(), "no log for round, skipping");
                continue;
            }

            let text = std::fs::read_to_string(&path).map_err(|source| ReportError::Io {
                path: path.display().to_string(),
                source,
            })?;

            let mut first = true;
            for pose in self.parser.parse(&text) {
                let label = if first {
                    round.to_string()
                } else {
                    String::new()
                };
                first = false;
                rows.push(Row::Record(AffinityRecord {
                    round: label,
                    mode: pose.mode,
                    affinity: pose.affinity,
                }));
            }

            rows.push(Row::Separator);
        }

        Ok(AggregatedDataset { rows })
    }
}
