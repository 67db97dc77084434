//! Shortest-Remaining-Time-First (preemptive).
//!
//! # Algorithm
//!
//! The arrived process with the least remaining time holds the CPU (ties:
//! earlier arrival, then input order). The choice can only change when a
//! process arrives or completes, so instead of stepping one tick at a time
//! the clock jumps to the next such event:
//!
//! 1. Select the best eligible process; if none, idle until the next arrival.
//! 2. Run it until it completes or the next arrival, whichever is first.
//! 3. Re-evaluate.
//!
//! Between events the running process's remaining time only shrinks, so it
//! keeps winning; the result is identical to unit stepping. Consecutive
//! runs of the same process are merged into one segment.
//!
//! # Complexity
//! O(n²): at most 2n events, one scan of the process set each.

use log::trace;

use crate::dispatching::ReadyQueue;
use crate::models::{Algorithm, ProcessRecord, SegmentOwner, Timeline};

pub(crate) fn run(records: &mut [ProcessRecord]) -> Timeline {
    let queue = ReadyQueue::for_algorithm(&Algorithm::Srtf);
    let mut timeline = Timeline::new();
    let mut now = 0;
    let mut pending = records.len();

    while pending > 0 {
        let next_arrival = ReadyQueue::next_arrival(records, now);

        let Some(i) = queue.select_best(records, now) else {
            match next_arrival {
                Some(next) => {
                    timeline.record_idle(now, next);
                    now = next;
                    continue;
                }
                None => break,
            }
        };

        let process = &mut records[i];
        let finish = now + process.remaining_time;
        let until = next_arrival.map_or(finish, |t| t.min(finish));

        let start = now;
        if process.execute(start, until - start) {
            pending -= 1;
        }
        now = until;

        trace!(
            "SRTF: {} runs [{start}, {now}), {} left",
            process.name,
            process.remaining_time
        );
        timeline.record_coalesced(SegmentOwner::process(process.index, &process.name), start, now);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use crate::models::ProcessInput;
    use crate::scheduler::run_srtf;

    fn spans(processes: &[ProcessInput]) -> Vec<(String, i64, i64)> {
        run_srtf(processes)
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
    fn test_srtf_textbook() {
        let processes = vec![
            ProcessInput::new("P1", 0, 8),
            ProcessInput::new("P2", 1, 4),
            ProcessInput::new("P3", 2, 9),
            ProcessInput::new("P4", 3, 5),
        ];
        assert_eq!(
            spans(&processes),
            vec![
                span("P1", 0, 1),
                span("P2", 1, 5),
                span("P4", 5, 10),
                span("P1", 10, 17),
                span("P3", 17, 26),
            ]
        );

        let result = run_srtf(&processes).unwrap();
        let waits: Vec<i64> = result.per_process.iter().map(|m| m.waiting_time).collect();
        assert_eq!(waits, vec![9, 0, 15, 2]);
        assert!((result.average_waiting_time - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_preempts_at_arrival_instant() {
        let processes = vec![ProcessInput::new("long", 0, 10), ProcessInput::new("short", 3, 2)];
        assert_eq!(
            spans(&processes),
            vec![span("long", 0, 3), span("short", 3, 5), span("long", 5, 12)]
        );
    }

    #[test]
    fn test_srtf_non_preempting_arrival_coalesces() {
        let processes = vec![ProcessInput::new("P1", 0, 3), ProcessInput::new("P2", 1, 5)];
        assert_eq!(spans(&processes), vec![span("P1", 0, 3), span("P2", 3, 8)]);
    }

    #[test]
    fn test_srtf_tie_keeps_earlier_arrival() {
        // At t=2 both have 2 left; P1 arrived first and keeps the CPU
        let processes = vec![ProcessInput::new("P1", 0, 4), ProcessInput::new("P2", 2, 2)];
        assert_eq!(spans(&processes), vec![span("P1", 0, 4), span("P2", 4, 6)]);
    }

    #[test]
    fn test_srtf_idle_between_arrivals() {
        let processes = vec![ProcessInput::new("P1", 2, 2), ProcessInput::new("P2", 6, 1)];
        assert_eq!(
            spans(&processes),
            vec![
                span("idle", 0, 2),
                span("P1", 2, 4),
                span("idle", 4, 6),
                span("P2", 6, 7),
            ]
        );
    }

    #[test]
    fn test_srtf_response_time() {
        let processes = vec![ProcessInput::new("long", 0, 10), ProcessInput::new("short", 3, 2)];
        let result = run_srtf(&processes).unwrap();
        assert_eq!(result.per_process[0].response_time, 0);
        assert_eq!(result.per_process[1].response_time, 0);
        assert_eq!(result.per_process[0].waiting_time, 2);
    }
}
