//! Run quality metrics (KPIs).
//!
//! Computes secondary performance indicators from a finished simulation,
//! complementing the per-process metrics and averages in the result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Last completion time |
//! | Busy / Idle time | CPU time spent on processes / idle |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Changes of running process |
//! | Avg Response Time | Mean of first dispatch minus arrival |
//! | Max Waiting Time | Longest waiting time of any process |

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Simulation performance indicators. Times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Last completion time.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time the CPU spent idle.
    pub idle_time: i64,
    /// Fraction of the makespan spent busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of changes of running process.
    pub context_switches: usize,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(result: &SimulationResult) -> Self {
        let timeline = &result.timeline;
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let n = result.per_process.len();

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                n as f64 / makespan as f64,
            )
        };

        let avg_response_time = if n == 0 {
            0.0
        } else {
            result
                .per_process
                .iter()
                .map(|m| m.response_time as f64)
                .sum::<f64>()
                / n as f64
        };

        Self {
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
            avg_response_time,
            max_waiting_time: result
                .per_process
                .iter()
                .map(|m| m.waiting_time)
                .max()
                .unwrap_or(0),
        }
    }
}
