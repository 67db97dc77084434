//! Execution timeline model.
//!
//! A timeline is the chronological list of CPU occupancy intervals produced
//! by one simulation run. Segments are contiguous from t=0 to the makespan;
//! idle time is represented explicitly by [`SegmentOwner::Idle`] segments.

use serde::{Deserialize, Serialize};

/// Who holds the CPU during a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentOwner {
    /// A process, identified by its input index.
    Process {
        /// Position in the caller's input list.
        index: usize,
        /// Display label.
        name: String,
    },
    /// No process is runnable.
    Idle,
}

impl SegmentOwner {
    /// Creates a process owner.
    pub fn process(index: usize, name: impl Into<String>) -> Self {
        Self::Process {
            index,
            name: name.into(),
        }
    }

    /// Input index of the owning process, `None` for idle.
    pub fn process_index(&self) -> Option<usize> {
        match self {
            Self::Process { index, .. } => Some(*index),
            Self::Idle => None,
        }
    }

    /// Label used in reports.
    pub fn label(&self) -> &str {
        match self {
            Self::Process { name, .. } => name,
            Self::Idle => "idle",
        }
    }

    /// Whether this is the idle sentinel.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A contiguous interval `[start_time, end_time)` of CPU occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process or idle.
    pub owner: SegmentOwner,
    /// Start instant (inclusive).
    pub start_time: i64,
    /// End instant (exclusive).
    pub end_time: i64,
}

impl ExecutionSegment {
    /// Creates a new segment.
    pub fn new(owner: SegmentOwner, start_time: i64, end_time: i64) -> Self {
        Self {
            owner,
            start_time,
            end_time,
        }
    }

    /// Length of the segment in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Ordered, append-only sequence of execution segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in chronological order.
    pub segments: Vec<ExecutionSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment. Empty intervals are ignored.
    pub fn record(&mut self, owner: SegmentOwner, start_time: i64, end_time: i64) {
        if end_time <= start_time {
            return;
        }
        debug_assert_eq!(start_time, self.end_time(), "timeline must stay contiguous");
        self.segments
            .push(ExecutionSegment::new(owner, start_time, end_time));
    }

    /// Appends a segment, extending the last one instead when it has the
    /// same owner and ends exactly at `start_time`.
    pub fn record_coalesced(&mut self, owner: SegmentOwner, start_time: i64, end_time: i64) {
        if end_time <= start_time {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.owner == owner && last.end_time == start_time {
                last.end_time = end_time;
                return;
            }
        }
        self.record(owner, start_time, end_time);
    }

    /// Records idle time.
    pub fn record_idle(&mut self, start_time: i64, end_time: i64) {
        self.record(SegmentOwner::Idle, start_time, end_time);
    }

    /// End of the last segment (0 when empty).
    pub fn end_time(&self) -> i64 {
        self.segments.last().map(|s| s.end_time).unwrap_or(0)
    }

    /// Latest end time. Same as [`Timeline::end_time`] for a contiguous timeline.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Segments owned by the process with the given input index.
    pub fn segments_for(&self, index: usize) -> Vec<&ExecutionSegment> {
        self.segments
            .iter()
            .filter(|s| s.owner.process_index() == Some(index))
            .collect()
    }

    /// Total CPU time given to one process.
    pub fn busy_time_for(&self, index: usize) -> i64 {
        self.segments_for(index).iter().map(|s| s.duration()).sum()
    }

    /// Total CPU time given to any process.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.owner.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.owner.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Number of times the running process changes.
    ///
    /// Idle gaps are skipped: a process resuming after idle time with no
    /// other process in between is not a switch.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut last: Option<usize> = None;
        for idx in self.segments.iter().filter_map(|s| s.owner.process_index()) {
            if let Some(prev) = last {
                if prev != idx {
                    switches += 1;
                }
            }
            last = Some(idx);
        }
        switches
    }

    /// Whether segments start at 0, have positive length, and touch end to start.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for s in &self.segments {
            if s.start_time != cursor || s.end_time <= s.start_time {
                return false;
            }
            cursor = s.end_time;
        }
        true
    }

    /// Process indices in dispatch order (idle skipped).
    pub fn dispatch_order(&self) -> Vec<usize> {
        self.segments
            .iter()
            .filter_map(|s| s.owner.process_index())
            .collect()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
