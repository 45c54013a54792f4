#![warn(missing_docs)]
//! vinarun-core - Round Execution and Timing
//!
//! Drives repeated blocking invocations of the AutoDock Vina command line
//! against one receptor/ligand pair and a fixed search box. Each invocation
//! is one *round*, distinguished only by the index woven into its output and
//! log filenames. The timed run loop tracks per-round wall-clock durations
//! and projects the remaining time for the batch from the mean of the rounds
//! completed so far.
//!
//! ## Pipeline
//!
//! ```text
//! DockingJobSpec (from configuration)
//!        │
//!        ▼
//! ┌─────────────┐
//! │ RoundRunner │  One blocking engine process per round
//! └──────┬──────┘
//!        │
//!        ▼
//!  Vec<RoundResult> + per-round log files on disk
//! ```

mod job;
mod runner;
mod timing;

pub use job::DockingJobSpec;
pub use runner::{RoundResult, RoundRunner, RunnerError};
pub use timing::{TimingState, format_dhms};
