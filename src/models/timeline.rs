//! Execution timeline ("Gantt chart") of CPU allocation.
//!
//! A [`Timeline`] is an ordered sequence of [`GanttSlice`]s, each one a
//! maximal contiguous span of CPU time given to a single process. The
//! preemptive strategies may compute allocation in small steps
//! internally, but the recorded timeline reflects operational boundaries
//! (context switches): consecutive slices for the same process are
//! coalesced into one. Idle time is simply absent — there are no
//! zero-process slices.

use serde::{Deserialize, Serialize};

/// One maximal contiguous span of CPU time for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSlice {
    /// Process the CPU was allocated to.
    pub pid: u32,
    /// Time unit the span starts at.
    pub start: u32,
    /// Length of the span (≥ 1).
    pub duration: u32,
}

impl GanttSlice {
    /// Time unit the span ends at (exclusive).
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.duration
    }
}

/// Ordered, coalescing accumulator of CPU-allocation spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<GanttSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a span of CPU time for `pid` starting at `start`.
    ///
    /// If the last recorded slice belongs to the same process and ends
    /// exactly at `start`, it is extended instead of appending a new
    /// slice. Zero-duration spans are ignored.
    pub fn record(&mut self, pid: u32, start: u32, duration: u32) {
        if duration == 0 {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end() == start {
                last.duration += duration;
                return;
            }
        }
        self.slices.push(GanttSlice {
            pid,
            start,
            duration,
        });
    }

    /// The recorded slices, ordered by start time.
    pub fn slices(&self) -> &[GanttSlice] {
        &self.slices
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice, or 0 for an empty timeline.
    pub fn span(&self) -> u32 {
        self.slices.last().map(|s| s.end()).unwrap_or(0)
    }

    /// Total CPU time recorded (sum of slice durations).
    pub fn busy_time(&self) -> u32 {
        self.slices.iter().map(|s| s.duration).sum()
    }
}
