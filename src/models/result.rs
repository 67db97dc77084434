//! Simulation result model.
//!
//! The result of one run: per-process metrics in the caller's input order,
//! the execution timeline, and the two headline averages.

use serde::{Deserialize, Serialize};

use super::{Algorithm, ProcessRecord, Timeline};

/// Final timing metrics for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Display label.
    pub name: String,
    /// Arrival instant.
    pub arrival_time: i64,
    /// Required CPU time.
    pub burst_time: i64,
    /// Instant the process finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// First dispatch minus arrival.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Derives metrics from a completed record.
    pub fn from_record(record: &ProcessRecord) -> Self {
        debug_assert!(record.is_completed(), "process '{}' never completed", record.name);
        let completion_time = record.completion_time.unwrap_or_default();
        let turnaround_time = completion_time - record.arrival_time;
        Self {
            name: record.name.clone(),
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - record.burst_time,
            response_time: record.response_time().unwrap_or_default(),
        }
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Metrics per process, in input order.
    pub per_process: Vec<ProcessMetrics>,
    /// Chronological CPU occupancy.
    pub timeline: Timeline,
    /// Mean waiting time across all processes.
    pub average_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub average_turnaround_time: f64,
}

impl SimulationResult {
    /// Builds the result from the finished records of a run.
    ///
    /// Records are reported in input order regardless of the order the
    /// algorithm left them in.
    pub fn finalize(
        algorithm: Algorithm,
        mut records: Vec<ProcessRecord>,
        timeline: Timeline,
    ) -> Self {
        records.sort_by_key(|r| r.index);
        let per_process: Vec<ProcessMetrics> =
            records.iter().map(ProcessMetrics::from_record).collect();

        // Totals can exceed i64 even when every instant fits
        let n = per_process.len();
        let (average_waiting_time, average_turnaround_time) = if n == 0 {
            (0.0, 0.0)
        } else {
            let total_wt: f64 = per_process.iter().map(|m| m.waiting_time as f64).sum();
            let total_tat: f64 = per_process.iter().map(|m| m.turnaround_time as f64).sum();
            (total_wt / n as f64, total_tat / n as f64)
        };

        Self {
            algorithm,
            per_process,
            timeline,
            average_waiting_time,
            average_turnaround_time,
        }
    }

    /// Metrics for the first process with the given name.
    pub fn metrics_for(&self, name: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.name == name)
    }

    /// Process names ordered by completion time (ties by input order).
    pub fn completion_order(&self) -> Vec<&str> {
        let mut indices: Vec<usize> = (0..self.per_process.len()).collect();
        indices.sort_by_key(|&i| (self.per_process[i].completion_time, i));
        indices
            .into_iter()
            .map(|i| self.per_process[i].name.as_str())
            .collect()
    }

    /// Latest completion time.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessInput, SegmentOwner};

    fn finished(index: usize, name: &str, arrival: i64, burst: i64, start: i64) -> ProcessRecord {
        let mut r = ProcessRecord::from_input(index, &ProcessInput::new(name, arrival, burst));
        r.execute(start, burst);
        r
    }

    #[test]
    fn test_metrics_from_record() {
        let r = finished(0, "P2", 1, 3, 5);
        let m = ProcessMetrics::from_record(&r);
        assert_eq!(m.completion_time, 8);
        assert_eq!(m.turnaround_time, 7);
        assert_eq!(m.waiting_time, 4);
        assert_eq!(m.response_time, 4);
    }

    #[test]
    fn test_finalize_restores_input_order_and_averages() {
        let records = vec![finished(1, "B", 0, 2, 2), finished(0, "A", 0, 2, 0)];
        let mut timeline = Timeline::new();
        timeline.record(SegmentOwner::process(0, "A"), 0, 2);
        timeline.record(SegmentOwner::process(1, "B"), 2, 4);

        let result = SimulationResult::finalize(Algorithm::Fcfs, records, timeline);
        assert_eq!(result.per_process[0].name, "A");
        assert_eq!(result.per_process[1].name, "B");
        // waits 0 and 2, turnarounds 2 and 4
        assert!((result.average_waiting_time - 1.0).abs() < 1e-10);
        assert!((result.average_turnaround_time - 3.0).abs() < 1e-10);
        assert_eq!(result.makespan(), 4);
        assert_eq!(result.completion_order(), vec!["A", "B"]);
        assert_eq!(result.metrics_for("B").map(|m| m.completion_time), Some(4));
        assert!(result.metrics_for("Z").is_none());
    }

    #[test]
    fn test_finalize_empty() {
        let result = SimulationResult::finalize(Algorithm::Sjf, Vec::new(), Timeline::new());
        assert!(result.per_process.is_empty());
        assert!((result.average_waiting_time - 0.0).abs() < 1e-10);
    }
}
