//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes once by `(arrival_time, input order)`.
//! 2. For each process, jump the clock to its arrival if the CPU would
//!    otherwise sit idle (recording the gap as an idle segment).
//! 3. Run the full burst as one segment.
//!
//! # Complexity
//! O(n log n).

use log::trace;

use crate::dispatching::ArrivalCursor;
use crate::models::{ProcessRecord, SegmentOwner, Timeline};

pub(crate) fn run(records: &mut [ProcessRecord]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut arrivals = ArrivalCursor::new(records);
    let mut now = 0;

    while let Some(i) = arrivals.take_next() {
        let process = &mut records[i];
        if now < process.arrival_time {
            timeline.record_idle(now, process.arrival_time);
            now = process.arrival_time;
        }

        let start = now;
        let burst = process.remaining_time;
        process.execute(start, burst);
        now += burst;

        trace!("FCFS: {} runs [{start}, {now})", process.name);
        timeline.record(SegmentOwner::process(process.index, &process.name), start, now);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use crate::models::{ProcessInput, SegmentOwner};
    use crate::scheduler::run_fcfs;

    fn spans(result: &crate::models::SimulationResult) -> Vec<(String, i64, i64)> {
        result
            .timeline
            .segments
            .iter()
            .map(|s| (s.owner.label().to_string(), s.start_time, s.end_time))
            .collect()
    }

    #[test]
    fn test_fcfs_textbook() {
        let processes = vec![
            ProcessInput::new("P1", 0, 5),
            ProcessInput::new("P2", 1, 3),
            ProcessInput::new("P3", 2, 8),
        ];
        let result = run_fcfs(&processes).unwrap();

        let completions: Vec<i64> = result.per_process.iter().map(|m| m.completion_time).collect();
        let waits: Vec<i64> = result.per_process.iter().map(|m| m.waiting_time).collect();
        assert_eq!(completions, vec![5, 8, 16]);
        assert_eq!(waits, vec![0, 4, 6]);
        assert!((result.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(format!("{:.2}", result.average_waiting_time), "3.33");
        // turnarounds 5, 7, 14
        assert!((result.average_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_idle_gaps() {
        let processes = vec![ProcessInput::new("P1", 2, 3), ProcessInput::new("P2", 10, 2)];
        let result = run_fcfs(&processes).unwrap();
        assert_eq!(
            spans(&result),
            vec![
                ("idle".to_string(), 0, 2),
                ("P1".to_string(), 2, 5),
                ("idle".to_string(), 5, 10),
                ("P2".to_string(), 10, 12),
            ]
        );
        assert!(result.timeline.is_contiguous());
    }

    #[test]
    fn test_fcfs_unsorted_input_reports_in_input_order() {
        let processes = vec![ProcessInput::new("P1", 4, 2), ProcessInput::new("P2", 0, 3)];
        let result = run_fcfs(&processes).unwrap();
        assert_eq!(result.per_process[0].name, "P1");
        assert_eq!(result.per_process[0].completion_time, 6);
        assert_eq!(result.per_process[0].waiting_time, 0);
        assert_eq!(result.per_process[1].completion_time, 3);
        assert_eq!(result.timeline.segments[1].owner, SegmentOwner::Idle);
    }

    #[test]
    fn test_fcfs_simultaneous_arrivals_use_input_order() {
        let processes = vec![ProcessInput::new("A", 0, 2), ProcessInput::new("B", 0, 1)];
        let result = run_fcfs(&processes).unwrap();
        assert_eq!(result.completion_order(), vec!["A", "B"]);
        assert_eq!(result.per_process[1].waiting_time, 2);
    }
}
