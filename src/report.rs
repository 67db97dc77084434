//! Plain-text rendering of simulation results.
//!
//! - [`ResultTable`]: one row per process (Name, Arrival, Burst, Finish,
//!   Turnaround, Waiting) followed by the two averages.
//! - [`GanttChart`]: a horizontal bar whose cells are proportional to
//!   segment durations, labelled with the process name when the cell is
//!   wide enough, over an axis of cumulative end times starting at 0.
//!
//! ```text
//! |   P1    | P2  |      P3       |
//! 0         5     8               16
//! ```

use std::fmt;

use crate::models::{SimulationResult, Timeline};

/// Default chart width in columns.
pub const DEFAULT_GANTT_WIDTH: usize = 60;

/// Widest chart that will be scaled to; larger requests are clamped.
pub const MAX_GANTT_WIDTH: usize = 10_000;

// Narrowest cell: one fill column plus its closing bar.
const MIN_CELL: usize = 2;

/// Results table view.
#[derive(Debug, Clone, Copy)]
pub struct ResultTable<'a>(pub &'a SimulationResult);

impl fmt::Display for ResultTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10}{:>8}{:>7}{:>8}{:>12}{:>9}",
            "Name", "Arrival", "Burst", "Finish", "Turnaround", "Waiting"
        )?;
        for m in &self.0.per_process {
            writeln!(
                f,
                "{:<10}{:>8}{:>7}{:>8}{:>12}{:>9}",
                m.name,
                m.arrival_time,
                m.burst_time,
                m.completion_time,
                m.turnaround_time,
                m.waiting_time
            )?;
        }
        write!(
            f,
            "Avg Waiting Time: {:.2}  |  Avg Turnaround Time: {:.2}",
            self.0.average_waiting_time, self.0.average_turnaround_time
        )
    }
}

/// Gantt chart view of a timeline.
#[derive(Debug, Clone, Copy)]
pub struct GanttChart<'a> {
    timeline: &'a Timeline,
    width: usize,
}

impl<'a> GanttChart<'a> {
    /// Chart of `timeline` scaled to roughly `width` columns, clamped to
    /// [`MAX_GANTT_WIDTH`].
    ///
    /// Every segment gets at least two columns, so charts with many short
    /// segments may come out wider.
    pub fn new(timeline: &'a Timeline, width: usize) -> Self {
        Self {
            timeline,
            width: width.clamp(MIN_CELL, MAX_GANTT_WIDTH),
        }
    }

    /// Column of each segment's closing bar.
    fn boundaries(&self) -> Vec<usize> {
        let makespan = self.timeline.end_time().max(1) as i128;
        let width = self.width as i128;
        let mut prev = 0usize;
        self.timeline
            .segments
            .iter()
            .map(|s| {
                let scaled = (s.end_time as i128 * width * 2 + makespan) / (makespan * 2);
                let col = (scaled as usize).max(prev + MIN_CELL);
                prev = col;
                col
            })
            .collect()
    }
}

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.timeline.is_empty() {
            return Ok(());
        }
        let cols = self.boundaries();

        // Bar
        f.write_str("|")?;
        let mut prev = 0;
        for (segment, &col) in self.timeline.segments.iter().zip(&cols) {
            let inner = col - prev - 1;
            let label = segment.owner.label();
            if segment.owner.is_idle() {
                f.write_str(&"-".repeat(inner))?;
            } else if label.chars().count() <= inner {
                let pad = inner - label.chars().count();
                let left = pad / 2;
                write!(f, "{}{label}{}", " ".repeat(left), " ".repeat(pad - left))?;
            } else {
                f.write_str(&"#".repeat(inner))?;
            }
            f.write_str("|")?;
            prev = col;
        }
        f.write_str("\n")?;

        // Axis: a label is dropped if it would overlap the previous one
        let mut axis = String::from("0");
        for (segment, &col) in self.timeline.segments.iter().zip(&cols) {
            if col > axis.len() {
                axis.push_str(&" ".repeat(col - axis.len()));
                axis.push_str(&segment.end_time.to_string());
            }
        }
        f.write_str(&axis)
    }
}

/// Renders the results table.
pub fn render_table(result: &SimulationResult) -> String {
    ResultTable(result).to_string()
}

/// Renders the timeline as a Gantt chart about `width` columns wide.
pub fn render_gantt(timeline: &Timeline, width: usize) -> String {
    GanttChart::new(timeline, width).to_string()
}

/// Renders a full report: heading, table, and Gantt chart.
pub fn render(result: &SimulationResult) -> String {
    format!(
        "{} ({})\n\n{}\n\n{}",
        result.algorithm,
        result.algorithm.description(),
        ResultTable(result),
        GanttChart::new(&result.timeline, DEFAULT_GANTT_WIDTH)
    )
}
