//! Arrival cursor: processes in `(arrival_time, input order)` order.

use crate::models::ProcessRecord;

/// Walks a process set in arrival order, handing out each process once.
///
/// Used by algorithms that admit processes into their own queue as
/// they arrive (FCFS, Round-Robin).
#[derive(Debug, Clone)]
pub struct ArrivalCursor {
    // (arrival_time, index), sorted
    order: Vec<(i64, usize)>,
    next: usize,
}

impl ArrivalCursor {
    /// Builds the cursor over all records.
    pub fn new(records: &[ProcessRecord]) -> Self {
        let mut order: Vec<(i64, usize)> =
            records.iter().map(|r| (r.arrival_time, r.index)).collect();
        order.sort_unstable();
        Self { order, next: 0 }
    }

    /// Arrival time of the next process not yet handed out.
    pub fn peek_time(&self) -> Option<i64> {
        self.order.get(self.next).map(|&(t, _)| t)
    }

    /// Hands out every pending process with `arrival_time <= now`.
    pub fn take_arrived(&mut self, now: i64) -> Vec<usize> {
        let start = self.next;
        while self.next < self.order.len() && self.order[self.next].0 <= now {
            self.next += 1;
        }
        self.order[start..self.next].iter().map(|&(_, i)| i).collect()
    }

    /// Hands out the next pending process regardless of time.
    pub fn take_next(&mut self) -> Option<usize> {
        let (_, index) = *self.order.get(self.next)?;
        self.next += 1;
        Some(index)
    }

    /// Whether every process has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.order.len()
    }
}
