//! CPU scheduling domain models.
//!
//! Provides the core data types for describing a simulation input and
//! its outcome.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessInput` | Caller-supplied process (name, arrival, burst) |
//! | `ProcessRecord` | Engine-private mutable state of a process during a run |
//! | `Algorithm` | Closed set of scheduling disciplines |
//! | `Timeline` / `ExecutionSegment` | Chronological CPU occupancy |
//! | `SimulationResult` / `ProcessMetrics` | Final per-process metrics and averages |

mod algorithm;
mod process;
mod result;
mod timeline;

pub use algorithm::{Algorithm, DEFAULT_QUANTUM};
pub use process::{ProcessInput, ProcessRecord};
pub use result::{ProcessMetrics, SimulationResult};
pub use timeline::{ExecutionSegment, SegmentOwner, Timeline};
