//! Process records.
//!
//! A [`Process`] holds the static inputs of one simulated process. The
//! strategies never mutate it; remaining-time bookkeeping happens on
//! private working copies inside the simulation loops. Once a process
//! finishes, its timings are frozen into a [`CompletedProcess`].
//!
//! # Time Representation
//! All times are non-negative integers in abstract time units relative to
//! the simulation start (t=0).

use serde::{Deserialize, Serialize};

/// Static inputs of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Positive identifier, unique within an input set.
    pub pid: u32,
    /// Time unit at which the process becomes ready.
    pub arrival_time: u32,
    /// Total CPU time required (≥ 1).
    pub burst_time: u32,
    /// Scheduling priority; lower value = higher priority.
    /// Only the priority strategies read it.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process with default (0) priority.
    pub fn new(pid: u32, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// A process that has run to completion, with all derived timings set.
///
/// Constructed only through [`CompletedProcess::finish`], so the
/// identities `turnaround = completion - arrival` and
/// `waiting = turnaround - burst` hold for every instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Identifier, unchanged from the input record.
    pub pid: u32,
    /// Arrival time from the input record.
    pub arrival_time: u32,
    /// Burst time from the input record.
    pub burst_time: u32,
    /// Priority from the input record.
    pub priority: i32,
    /// Time unit at which the last slice of this process ended.
    pub completion_time: u32,
    /// `completion_time - arrival_time`.
    pub turnaround_time: u32,
    /// `turnaround_time - burst_time` (time spent ready but not running).
    pub waiting_time: u32,
}

impl CompletedProcess {
    /// Freezes a finished process at the given completion time.
    pub fn finish(process: &Process, completion_time: u32) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            pid: process.pid,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(1, 3, 7).with_priority(2);
        assert_eq!(p.pid, 1);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(Process::new(1, 0, 1).priority, 0);
    }

    #[test]
    fn test_finish_derives_timings() {
        let p = Process::new(4, 2, 5);
        let done = CompletedProcess::finish(&p, 12);
        assert_eq!(done.completion_time, 12);
        assert_eq!(done.turnaround_time, 10);
        assert_eq!(done.waiting_time, 5);
        assert_eq!(done.pid, 4);
    }

    #[test]
    fn test_finish_no_waiting() {
        // Runs immediately on arrival
        let p = Process::new(1, 4, 6);
        let done = CompletedProcess::finish(&p, 10);
        assert_eq!(done.waiting_time, 0);
        assert_eq!(done.turnaround_time, done.burst_time);
    }

    #[test]
    fn test_priority_deserializes_to_default() {
        let p: Process = serde_json::from_str(
            r#"{"pid": 2, "arrival_time": 0, "burst_time": 3}"#,
        )
        .unwrap();
        assert_eq!(p.priority, 0);
    }
}
