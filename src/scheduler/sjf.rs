//! Shortest-Job-First (non-preemptive).
//!
//! Whenever the CPU becomes free, the arrived process with the smallest
//! burst runs to completion. Ties: earlier arrival, then input order.
//!
//! # Complexity
//! O(n²): one scan of the process set per decision point.

use log::trace;

use crate::dispatching::ReadyQueue;
use crate::models::{Algorithm, ProcessRecord, SegmentOwner, Timeline};

pub(crate) fn run(records: &mut [ProcessRecord]) -> Timeline {
    let queue = ReadyQueue::for_algorithm(&Algorithm::Sjf);
    let mut timeline = Timeline::new();
    let mut now = 0;
    let mut pending = records.len();

    while pending > 0 {
        let Some(i) = queue.select_best(records, now) else {
            match ReadyQueue::next_arrival(records, now) {
                Some(next) => {
                    timeline.record_idle(now, next);
                    now = next;
                    continue;
                }
                None => break,
            }
        };

        let process = &mut records[i];
        let start = now;
        let burst = process.remaining_time;
        process.execute(start, burst);
        now += burst;
        pending -= 1;

        trace!("SJF: {} (burst {burst}) runs [{start}, {now})", process.name);
        timeline.record(SegmentOwner::process(process.index, &process.name), start, now);
    }

    timeline
}
