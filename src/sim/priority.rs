//! Priority scheduling, non-preemptive and preemptive.
//!
//! # Algorithm
//!
//! One loop parameterized by the `preemptive` flag; lower numeric
//! priority wins. Selection key is `(priority, arrival, input position)`
//! and the running process is kept on a priority tie — only a strictly
//! better priority preempts, and only in the preemptive variant.
//!
//! Non-preemptive: a started process runs its whole remaining burst in
//! one slice. Preemptive: the slice is additionally bounded by the next
//! arrival, where a higher-priority process may take over (same loop
//! shape as SRTF with priority as the metric).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.4

use log::{debug, trace};

use super::{intake, CompletionLog, Strategy};
use crate::error::SchedulerError;
use crate::models::{Process, SimulationResult, Timeline};
use crate::validation;

/// Priority scheduling; lower `priority` value = scheduled first.
#[derive(Debug, Clone, Copy)]
pub struct PriorityScheduling {
    preemptive: bool,
}

impl PriorityScheduling {
    /// A started process always runs to completion.
    pub fn non_preemptive() -> Self {
        Self { preemptive: false }
    }

    /// A newly ready process with strictly better priority preempts.
    pub fn preemptive() -> Self {
        Self { preemptive: true }
    }

    /// Whether this variant preempts.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Strategy for PriorityScheduling {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "Priority (Preemptive)"
        } else {
            "Priority"
        }
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SchedulerError> {
        if let Some(err) = validation::first_error(processes) {
            return Err(err);
        }

        let jobs = intake(processes);
        let mut timeline = Timeline::new();
        let mut log = CompletionLog::new(processes.len());
        let mut ready = Vec::new();
        let mut current: Option<super::Job> = None;
        let mut next = 0;
        let mut clock: u32 = 0;

        while next < jobs.len() || !ready.is_empty() || current.is_some() {
            while next < jobs.len() && jobs[next].arrival <= clock {
                ready.push(jobs[next].clone());
                next += 1;
            }

            ready.sort_by_key(|j| (j.priority, j.arrival, j.idx));

            let take_head = match (&current, ready.first()) {
                (None, Some(_)) => true,
                (Some(cur), Some(head)) => {
                    self.preemptive && head.priority < cur.priority
                }
                _ => false,
            };
            if take_head {
                if let Some(prev) = current.replace(ready.remove(0)) {
                    trace!(
                        "{}: preempting pid {} (priority {}) at t={}",
                        self.name(),
                        prev.pid,
                        prev.priority,
                        clock
                    );
                    ready.push(prev);
                }
            }

            let mut cur = match current.take() {
                Some(job) => job,
                None => {
                    trace!("{}: idle until t={}", self.name(), jobs[next].arrival);
                    clock = jobs[next].arrival;
                    continue;
                }
            };

            let mut slice = cur.remaining;
            if self.preemptive && next < jobs.len() {
                slice = slice.min(jobs[next].arrival - clock);
            }

            timeline.record(cur.pid, clock, slice);
            cur.remaining -= slice;
            clock += slice;

            if cur.remaining == 0 {
                log.finish(cur.idx, clock);
            } else {
                current = Some(cur);
            }
        }

        debug!(
            "{}: {} processes simulated in {} time units",
            self.name(),
            processes.len(),
            clock
        );
        Ok(SimulationResult::new(log.merge(processes), timeline, clock))
    }

    fn description(&self) -> &'static str {
        if self.preemptive {
            "Priority scheduling, preemptive (lower value = higher priority)"
        } else {
            "Priority scheduling, non-preemptive (lower value = higher priority)"
        }
    }
}
