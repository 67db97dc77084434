//! CPU scheduling simulator.
//!
//! Simulates single-CPU scheduling of a fixed set of processes under four
//! classic policies and reports an execution timeline together with
//! per-process completion, turnaround, waiting and response times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessInput`, `Algorithm`, `Timeline`,
//!   `ExecutionSegment`, `ProcessMetrics`, `SimulationResult`
//! - **`validation`**: Input checks and the `SimulationError` taxonomy
//! - **`dispatching`**: Selection rules and the ready queue shared by the policies
//! - **`scheduler`**: FCFS, SJF, SRTF and Round-Robin simulations, KPIs
//! - **`report`**: Plain-text results table and Gantt chart
//! - **`workload`**: Seeded random workloads
//!
//! # Example
//! ```
//! use u_cpusched::{run_fcfs, ProcessInput};
//!
//! let result = run_fcfs(&[
//!     ProcessInput::new("P1", 0, 5),
//!     ProcessInput::new("P2", 1, 3),
//!     ProcessInput::new("P3", 2, 8),
//! ])
//! .unwrap();
//! assert_eq!(result.per_process[2].completion_time, 16);
//! assert!((result.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use models::{
    Algorithm, ExecutionSegment, ProcessInput, ProcessMetrics, SegmentOwner, SimulationResult,
    Timeline, DEFAULT_QUANTUM,
};
pub use scheduler::{
    compare_all, run_fcfs, run_round_robin, run_sjf, run_srtf, simulate, SimulationKpi,
    SimulationRequest,
};
pub use validation::{SimulationError, ValidationError, ValidationErrorKind};
