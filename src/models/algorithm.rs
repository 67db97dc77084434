//! Scheduling algorithm selector.
//!
//! The set of algorithms is closed: every run is dispatched by an
//! exhaustive `match` on [`Algorithm`], so there is no "unknown algorithm"
//! state past parsing.
//!
//! # Textual Selectors
//!
//! | Selector | Algorithm |
//! |----------|-----------|
//! | `FCFS`, `First Come First Served`, `FIFO` | [`Algorithm::Fcfs`] |
//! | `SJF`, `SJF (Non-Preemptive)`, `Shortest Job First`, `SPN` | [`Algorithm::Sjf`] |
//! | `SRTF`, `SRTF (Preemptive)`, `Shortest Remaining Time First`, `SRT` | [`Algorithm::Srtf`] |
//! | `RR`, `Round Robin`, `rr:4`, `round-robin=3` | [`Algorithm::RoundRobin`] |
//!
//! Matching ignores case, spaces, and punctuation. Round-Robin without an
//! explicit quantum uses [`DEFAULT_QUANTUM`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::SimulationError;

/// Round-Robin quantum used when a selector does not specify one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive).
    Srtf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous slice per dispatch.
        quantum: i64,
    },
}

impl Algorithm {
    /// Round-Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::RoundRobin { quantum }
    }

    /// All four algorithms, Round-Robin using `quantum`.
    pub fn all(quantum: i64) -> [Self; 4] {
        [Self::Fcfs, Self::Sjf, Self::Srtf, Self::round_robin(quantum)]
    }

    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Long description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::Sjf => "Shortest-Job-First (Non-Preemptive)",
            Self::Srtf => "Shortest-Remaining-Time-First (Preemptive)",
            Self::RoundRobin { .. } => "Round-Robin",
        }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }

    /// The quantum, for Round-Robin.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        let unsupported = || SimulationError::UnsupportedAlgorithm(selector.to_string());

        let (name, quantum) = match selector.split_once(|c: char| c == ':' || c == '=') {
            Some((name, q)) => (name, Some(q.trim())),
            None => (selector, None),
        };

        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let algorithm = match key.as_str() {
            "fcfs" | "firstcomefirstserved" | "firstcomefirstserve" | "fifo" => Self::Fcfs,
            "sjf" | "sjfnonpreemptive" | "shortestjobfirst" | "spn" => Self::Sjf,
            "srtf" | "srtfpreemptive" | "shortestremainingtimefirst" | "srt" => Self::Srtf,
            "rr" | "roundrobin" => {
                let quantum = match quantum {
                    Some(q) => q.parse::<i64>().map_err(|_| unsupported())?,
                    None => DEFAULT_QUANTUM,
                };
                return Ok(Self::round_robin(quantum));
            }
            _ => return Err(unsupported()),
        };

        if quantum.is_some() {
            return Err(unsupported());
        }
        Ok(algorithm)
    }
}
