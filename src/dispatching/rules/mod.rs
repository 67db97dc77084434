//! Built-in selection rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | [`ArrivalTime`] | arrival instant | FCFS, Round-Robin arrivals, tie-break |
//! | [`ShortestBurst`] | total burst | SJF |
//! | [`ShortestRemaining`] | remaining time | SRTF |
//! | [`InputOrder`] | input position | final tie-break |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::ProcessRecord;

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl SelectionRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Smallest total burst first. Minimizes mean waiting time when all
/// processes are available at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Smallest remaining time first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Position in the caller's input list. Never ties for distinct processes.
#[derive(Debug, Clone, Copy)]
pub struct InputOrder;

impl SelectionRule for InputOrder {
    fn name(&self) -> &'static str {
        "INPUT"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.index as RuleScore
    }

    fn description(&self) -> &'static str {
        "Input Order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessInput;

    fn make(index: usize, arrival: i64, burst: i64) -> ProcessRecord {
        let input = ProcessInput::new(format!("P{index}"), arrival, burst);
        ProcessRecord::from_input(index, &input)
    }

    #[test]
    fn test_arrival_time() {
        assert!(ArrivalTime.evaluate(&make(1, 2, 9)) < ArrivalTime.evaluate(&make(0, 5, 1)));
    }

    #[test]
    fn test_shortest_burst() {
        let short = make(0, 0, 2);
        let long = make(1, 0, 8);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_shortest_remaining() {
        let mut started = make(0, 0, 10);
        started.execute(0, 6); // 4 left
        let fresh = make(1, 0, 5);
        assert!(ShortestRemaining.evaluate(&started) < ShortestRemaining.evaluate(&fresh));
        // Burst-based rule still prefers the fresh one
        assert!(ShortestBurst.evaluate(&fresh) < ShortestBurst.evaluate(&started));
    }

    #[test]
    fn test_input_order() {
        assert_eq!(InputOrder.evaluate(&make(3, 0, 1)), 3);
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestRemaining.name(), "SRTF");
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
    }
}
