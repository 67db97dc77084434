//! Scheduling algorithms and run entry points.
//!
//! Every entry point validates its input, copies it into private
//! [`ProcessRecord`]s, runs one discrete-event simulation, and returns the
//! finished [`SimulationResult`]. Validation failures return before any
//! simulated time advances.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | smallest burst among arrived |
//! | SRTF | yes, on arrival | smallest remaining time among arrived |
//! | Round-Robin | yes, after a quantum | FIFO rotation |
//!
//! Ties are always broken by arrival time, then input order.
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessInput;
//! use u_cpusched::scheduler::run_round_robin;
//!
//! let processes = vec![
//!     ProcessInput::new("P1", 0, 5),
//!     ProcessInput::new("P2", 1, 3),
//!     ProcessInput::new("P3", 2, 1),
//! ];
//! let result = run_round_robin(&processes, 2).unwrap();
//! assert_eq!(result.per_process[0].completion_time, 9);
//! assert_eq!(result.timeline.len(), 6);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;
mod srtf;

pub use kpi::SimulationKpi;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Algorithm, ProcessInput, ProcessRecord, SimulationResult};
use crate::validation::{validate_processes, validate_quantum, SimulationError};

/// Runs First-Come-First-Served.
pub fn run_fcfs(processes: &[ProcessInput]) -> Result<SimulationResult, SimulationError> {
    simulate(processes, &Algorithm::Fcfs)
}

/// Runs non-preemptive Shortest-Job-First.
pub fn run_sjf(processes: &[ProcessInput]) -> Result<SimulationResult, SimulationError> {
    simulate(processes, &Algorithm::Sjf)
}

/// Runs preemptive Shortest-Remaining-Time-First.
pub fn run_srtf(processes: &[ProcessInput]) -> Result<SimulationResult, SimulationError> {
    simulate(processes, &Algorithm::Srtf)
}

/// Runs Round-Robin with the given quantum.
pub fn run_round_robin(
    processes: &[ProcessInput],
    quantum: i64,
) -> Result<SimulationResult, SimulationError> {
    simulate(processes, &Algorithm::round_robin(quantum))
}

/// Runs the given algorithm.
///
/// # Errors
/// - [`SimulationError::InvalidInput`] if the process set fails validation
/// - [`SimulationError::InvalidQuantum`] for Round-Robin with `quantum <= 0`
pub fn simulate(
    processes: &[ProcessInput],
    algorithm: &Algorithm,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes).map_err(SimulationError::InvalidInput)?;
    if let Algorithm::RoundRobin { quantum } = algorithm {
        validate_quantum(*quantum)?;
    }

    let mut records = ProcessRecord::from_inputs(processes);
    debug!("{algorithm}: simulating {} processes", records.len());

    let timeline = match *algorithm {
        Algorithm::Fcfs => fcfs::run(&mut records),
        Algorithm::Sjf => sjf::run(&mut records),
        Algorithm::Srtf => srtf::run(&mut records),
        Algorithm::RoundRobin { quantum } => round_robin::run(&mut records, quantum),
    };

    let result = SimulationResult::finalize(*algorithm, records, timeline);
    debug!(
        "{algorithm}: makespan {}, {} segments, avg waiting {:.2}, avg turnaround {:.2}",
        result.makespan(),
        result.timeline.len(),
        result.average_waiting_time,
        result.average_turnaround_time
    );
    Ok(result)
}

/// Runs all four algorithms on the same input, Round-Robin with `quantum`.
///
/// Results are in the order FCFS, SJF, SRTF, Round-Robin.
pub fn compare_all(
    processes: &[ProcessInput],
    quantum: i64,
) -> Result<Vec<SimulationResult>, SimulationError> {
    Algorithm::all(quantum)
        .iter()
        .map(|algorithm| simulate(processes, algorithm))
        .collect()
}

/// A complete simulation configuration.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessInput;
/// use u_cpusched::scheduler::SimulationRequest;
///
/// let request = SimulationRequest::from_selector("SJF (Non-Preemptive)")
///     .unwrap()
///     .with_process(ProcessInput::new("P1", 0, 7))
///     .with_process(ProcessInput::new("P2", 2, 4));
///
/// let result = request.run().unwrap();
/// assert_eq!(result.per_process[1].completion_time, 11);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessInput>,
    /// Algorithm to run.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a request with no processes.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            processes: Vec::new(),
            algorithm,
        }
    }

    /// Creates a request from a textual algorithm selector.
    pub fn from_selector(selector: &str) -> Result<Self, SimulationError> {
        Ok(Self::new(selector.parse()?))
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessInput) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the process set.
    pub fn with_processes(mut self, processes: Vec<ProcessInput>) -> Self {
        self.processes = processes;
        self
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        simulate(&self.processes, &self.algorithm)
    }
}
