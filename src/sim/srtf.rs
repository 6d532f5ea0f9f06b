//! Shortest Remaining Time First scheduling (preemptive SJF).
//!
//! # Algorithm
//!
//! Event-driven simulation: at each decision point, admit arrivals and
//! select the smallest `(remaining, arrival, input position)` key among
//! the ready list and the running process — the running process is kept
//! on a remaining-time tie. The selected process runs until its
//! remaining time is exhausted or the next arrival, whichever comes
//! first; preemption can only change the decision at an arrival, so no
//! finer stepping is needed. The timeline coalesces back-to-back slices
//! of the same process into one span.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.2

use log::{debug, trace};

use super::{intake, CompletionLog, Strategy};
use crate::error::SchedulerError;
use crate::models::{Process, SimulationResult, Timeline};
use crate::validation;

/// Shortest Remaining Time First: preemptive, smallest remaining wins.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl Strategy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
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

            ready.sort_by_key(|j| (j.remaining, j.arrival, j.idx));

            let take_head = match (&current, ready.first()) {
                (None, Some(_)) => true,
                // Strictly shorter only: the running process wins ties
                (Some(cur), Some(head)) => head.remaining < cur.remaining,
                _ => false,
            };
            if take_head {
                if let Some(prev) = current.replace(ready.remove(0)) {
                    trace!(
                        "SRTF: preempting pid {} ({} remaining) at t={}",
                        prev.pid,
                        prev.remaining,
                        clock
                    );
                    ready.push(prev);
                }
            }

            let mut cur = match current.take() {
                Some(job) => job,
                None => {
                    trace!("SRTF: idle until t={}", jobs[next].arrival);
                    clock = jobs[next].arrival;
                    continue;
                }
            };

            // Run until done or the next arrival forces a new decision
            let mut slice = cur.remaining;
            if next < jobs.len() {
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
            "SRTF: {} processes simulated in {} time units",
            processes.len(),
            clock
        );
        Ok(SimulationResult::new(log.merge(processes), timeline, clock))
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First (preemptive)"
    }
}
