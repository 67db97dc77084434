//! Ready queue: eligibility tracking and rule-based ordering.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, SelectionRule};
use crate::models::{Algorithm, ProcessRecord};

/// Orders the eligible subset of a process set.
///
/// A process is eligible the instant `arrival_time <= now` and
/// stays eligible until it completes. Rules are applied in sequence, the
/// next rule only breaking ties of the previous one; after all rules the
/// canonical chain (arrival time, then input order) always decides.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::ReadyQueue;
/// use u_cpusched::models::{Algorithm, ProcessInput, ProcessRecord};
///
/// let records = ProcessRecord::from_inputs(&[
///     ProcessInput::new("P1", 0, 4),
///     ProcessInput::new("P2", 9, 1),
/// ]);
/// let queue = ReadyQueue::for_algorithm(&Algorithm::Sjf);
/// assert_eq!(queue.eligible(&records, 0), vec![0]);
/// assert_eq!(ReadyQueue::next_arrival(&records, 0), Some(9));
/// ```
#[derive(Clone, Default)]
pub struct ReadyQueue {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl ReadyQueue {
    /// Creates a queue ordered only by the canonical tie-break chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule (applied after the rules already added).
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// The selection policy of a scheduling algorithm.
    ///
    /// Round-Robin shares FCFS ordering: it only consults the queue for
    /// arrival order, its rotation lives in the algorithm itself.
    pub fn for_algorithm(algorithm: &Algorithm) -> Self {
        match algorithm {
            Algorithm::Fcfs | Algorithm::RoundRobin { .. } => {
                Self::new().with_rule(rules::ArrivalTime)
            }
            Algorithm::Sjf => Self::new().with_rule(rules::ShortestBurst),
            Algorithm::Srtf => Self::new().with_rule(rules::ShortestRemaining),
        }
    }

    /// Indices of arrived, unfinished processes, in input order.
    pub fn eligible(&self, records: &[ProcessRecord], now: i64) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_eligible(now))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of eligible processes, highest priority first.
    pub fn ordered(&self, records: &[ProcessRecord], now: i64) -> Vec<usize> {
        let mut indices = self.eligible(records, now);
        indices.sort_by(|&a, &b| self.compare(&records[a], &records[b]));
        indices
    }

    /// Index of the eligible process that should run next.
    pub fn select_best(&self, records: &[ProcessRecord], now: i64) -> Option<usize> {
        self.eligible(records, now)
            .into_iter()
            .min_by(|&a, &b| self.compare(&records[a], &records[b]))
    }

    /// Earliest arrival strictly after `after` among unfinished processes.
    pub fn next_arrival(records: &[ProcessRecord], after: i64) -> Option<i64> {
        records
            .iter()
            .filter(|r| !r.is_completed() && r.arrival_time > after)
            .map(|r| r.arrival_time)
            .min()
    }

    /// Compares two processes under this queue's policy.
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        rules::ArrivalTime
            .evaluate(a)
            .cmp(&rules::ArrivalTime.evaluate(b))
            .then_with(|| rules::InputOrder.evaluate(a).cmp(&rules::InputOrder.evaluate(b)))
    }
}

impl std::fmt::Debug for ReadyQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadyQueue")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessInput;

    fn records(specs: &[(&str, i64, i64)]) -> Vec<ProcessRecord> {
        let inputs: Vec<ProcessInput> = specs
            .iter()
            .map(|&(n, a, b)| ProcessInput::new(n, a, b))
            .collect();
        ProcessRecord::from_inputs(&inputs)
    }

    #[test]
    fn test_eligibility_by_arrival() {
        let recs = records(&[("P1", 0, 3), ("P2", 2, 3), ("P3", 5, 3)]);
        let queue = ReadyQueue::new();
        assert_eq!(queue.eligible(&recs, 0), vec![0]);
        assert_eq!(queue.eligible(&recs, 2), vec![0, 1]);
        assert_eq!(queue.eligible(&recs, 9), vec![0, 1, 2]);
    }

    #[test]
    fn test_completed_leave_eligibility() {
        let mut recs = records(&[("P1", 0, 1), ("P2", 0, 1)]);
        recs[0].execute(0, 1);
        let queue = ReadyQueue::new();
        assert_eq!(queue.eligible(&recs, 1), vec![1]);
    }

    #[test]
    fn test_shortest_burst_ordering() {
        let recs = records(&[("long", 0, 9), ("short", 0, 2), ("medium", 0, 5)]);
        let queue = ReadyQueue::for_algorithm(&Algorithm::Sjf);
        let now = 0;
        assert_eq!(queue.ordered(&recs, now), vec![1, 2, 0]);
        assert_eq!(queue.select_best(&recs, now), Some(1));
    }

    #[test]
    fn test_tie_break_arrival_then_input_order() {
        // All bursts equal: earlier arrival first, then input order
        let recs = records(&[("C", 2, 4), ("A", 1, 4), ("B", 1, 4)]);
        let queue = ReadyQueue::for_algorithm(&Algorithm::Sjf);
        let now = 3;
        assert_eq!(queue.ordered(&recs, now), vec![1, 2, 0]);
    }

    #[test]
    fn test_shortest_remaining_uses_progress() {
        let mut recs = records(&[("P1", 0, 8), ("P2", 0, 5)]);
        recs[0].execute(0, 4); // P1 remaining 4 < P2's 5
        let queue = ReadyQueue::for_algorithm(&Algorithm::Srtf);
        assert_eq!(queue.select_best(&recs, 4), Some(0));
    }

    #[test]
    fn test_empty_selection() {
        let recs = records(&[("P1", 5, 1)]);
        let queue = ReadyQueue::for_algorithm(&Algorithm::Fcfs);
        assert!(queue.select_best(&recs, 0).is_none());
        assert!(queue.select_best(&[], 0).is_none());
    }

    #[test]
    fn test_next_arrival() {
        let mut recs = records(&[("P1", 0, 1), ("P2", 4, 1), ("P3", 7, 1)]);
        assert_eq!(ReadyQueue::next_arrival(&recs, 0), Some(4));
        assert_eq!(ReadyQueue::next_arrival(&recs, 4), Some(7));
        assert_eq!(ReadyQueue::next_arrival(&recs, 7), None);
        recs[1].execute(4, 1);
        assert_eq!(ReadyQueue::next_arrival(&recs, 0), Some(7));
    }

    #[test]
    fn test_debug_lists_rules() {
        let queue = ReadyQueue::for_algorithm(&Algorithm::Srtf);
        assert!(format!("{queue:?}").contains("SRTF"));
    }
}
