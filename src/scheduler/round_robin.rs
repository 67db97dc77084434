//! Round-Robin.
//!
//! # Algorithm
//!
//! A FIFO ready queue, separate from arrival order:
//!
//! 1. A process joins the tail when it arrives.
//! 2. The head runs for `min(remaining, quantum)` ticks as one segment.
//! 3. Every process that arrived up to and including the end of that slice
//!    joins the tail first; only then is the preempted process re-queued.
//! 4. A process that finishes within its slice leaves for good.
//! 5. An empty queue with processes still to come idles until the next arrival.

use std::collections::VecDeque;

use log::trace;

use crate::dispatching::ArrivalCursor;
use crate::models::{ProcessRecord, SegmentOwner, Timeline};

pub(crate) fn run(records: &mut [ProcessRecord], quantum: i64) -> Timeline {
    let mut timeline = Timeline::new();
    let mut arrivals = ArrivalCursor::new(records);
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(records.len());
    let mut now = 0;

    ready.extend(arrivals.take_arrived(now));

    loop {
        let Some(i) = ready.pop_front() else {
            match arrivals.peek_time() {
                Some(next) => {
                    timeline.record_idle(now, next);
                    now = next;
                    ready.extend(arrivals.take_arrived(now));
                    continue;
                }
                None => break,
            }
        };

        let process = &mut records[i];
        let slice = process.remaining_time.min(quantum);
        let start = now;
        let finished = process.execute(start, slice);
        now += slice;

        trace!(
            "RR: {} runs [{start}, {now}), {} left",
            process.name,
            process.remaining_time
        );
        timeline.record(SegmentOwner::process(process.index, &process.name), start, now);

        ready.extend(arrivals.take_arrived(now));
        if !finished {
            ready.push_back(i);
        }
    }

    timeline
}

#[cfg(test)]
mod tests {
    use crate::models::ProcessInput;
    use crate::scheduler::{run_fcfs, run_round_robin};

    fn spans(processes: &[ProcessInput], quantum: i64) -> Vec<(String, i64, i64)> {
        run_round_robin(processes, quantum)
            .unwrap()
            .timeline
            .segments
            .iter()
            .map(|s| (s.owner.label().to_string(), s.start_time, s.end_time))
            .collect()
    }

    fn span(name: &str, start: i64, end: i64) -> (String, i64, i64) {
        (name.to_string(), start, end)
    }

    #[test]
    fn test_rr_textbook_quantum_two() {
        let processes = vec![
            ProcessInput::new("P1", 0, 5),
            ProcessInput::new("P2", 1, 3),
            ProcessInput::new("P3", 2, 1),
        ];
        assert_eq!(
            spans(&processes, 2),
            vec![
                span("P1", 0, 2),
                span("P2", 2, 4),
                span("P3", 4, 5),
                span("P1", 5, 7),
                span("P2", 7, 8),
                span("P1", 8, 9),
            ]
        );

        let result = run_round_robin(&processes, 2).unwrap();
        let completions: Vec<i64> = result.per_process.iter().map(|m| m.completion_time).collect();
        assert_eq!(completions, vec![9, 8, 5]);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_first() {
        // P2 arrives exactly when P1's slice ends and is queued ahead of P1
        let processes = vec![ProcessInput::new("P1", 0, 4), ProcessInput::new("P2", 2, 2)];
        assert_eq!(
            spans(&processes, 2),
            vec![span("P1", 0, 2), span("P2", 2, 4), span("P1", 4, 6)]
        );
    }

    #[test]
    fn test_rr_one_segment_per_dispatch() {
        let processes = vec![ProcessInput::new("P1", 0, 5)];
        assert_eq!(
            spans(&processes, 2),
            vec![span("P1", 0, 2), span("P1", 2, 4), span("P1", 4, 5)]
        );
    }

    #[test]
    fn test_rr_idle_until_next_arrival() {
        let processes = vec![ProcessInput::new("P1", 0, 1), ProcessInput::new("P2", 3, 2)];
        assert_eq!(
            spans(&processes, 2),
            vec![span("P1", 0, 1), span("idle", 1, 3), span("P2", 3, 5)]
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let processes = vec![
            ProcessInput::new("P1", 0, 5),
            ProcessInput::new("P2", 1, 3),
            ProcessInput::new("P3", 2, 8),
        ];
        let rr = run_round_robin(&processes, 8).unwrap();
        let fcfs = run_fcfs(&processes).unwrap();
        assert_eq!(rr.per_process, fcfs.per_process);
        assert_eq!(rr.timeline, fcfs.timeline);
    }
}
