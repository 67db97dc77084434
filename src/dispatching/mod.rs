//! Ready-queue management and selection rules.
//!
//! Decides which arrived, unfinished process gets the CPU next. A
//! [`ReadyQueue`] orders eligible processes by a primary
//! [`SelectionRule`] and then by the canonical tie-break chain
//! (arrival time, then input order), so every algorithm is deterministic.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::ReadyQueue;
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::{ProcessInput, ProcessRecord};
//!
//! let records = ProcessRecord::from_inputs(&[
//!     ProcessInput::new("P1", 0, 7),
//!     ProcessInput::new("P2", 0, 3),
//! ]);
//! let queue = ReadyQueue::new().with_rule(rules::ShortestBurst);
//! let best = queue.select_best(&records, 0);
//! assert_eq!(best, Some(1));
//! ```

mod arrivals;
mod engine;
pub mod rules;

pub use arrivals::ArrivalCursor;
pub use engine::ReadyQueue;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A rule that ranks eligible processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process.
    fn evaluate(&self, process: &ProcessRecord) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
