//! Scheduling algorithm strategies.
//!
//! Provides the six deterministic simulators — FCFS, SJF, SRTF, Round
//! Robin, and priority scheduling in non-preemptive and preemptive
//! variants — behind a common [`Strategy`] trait, plus the [`Algorithm`]
//! selector and KPI aggregation.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::sim::{simulate, Algorithm};
//!
//! let procs = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
//! let result = simulate(Algorithm::Fcfs, &procs).unwrap();
//! assert_eq!(result.total_time, 7);
//! ```
//!
//! # Determinism
//!
//! Tie-breaking is explicit everywhere: selection keys are
//! `(primary metric, arrival time, input position)`, never a reliance on
//! sort stability. Two runs over value-identical inputs produce identical
//! results.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use kpi::SimulationKpi;
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::{CompletedProcess, Process, SimulationResult};

/// A deterministic scheduling simulator.
///
/// Implementations snapshot the input, simulate on working copies, and
/// never mutate the caller's records — the same slice can be passed to
/// any number of strategies.
pub trait Strategy: Send + Sync + fmt::Debug {
    /// Strategy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Runs the simulation over the given process set.
    ///
    /// An empty set yields an empty result; malformed input (zero burst,
    /// duplicate PID) is rejected before the simulation starts.
    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SchedulerError>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Algorithm selector for dispatch-style callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    Srtf,
    /// Round Robin with a fixed time quantum.
    RoundRobin { quantum: u32 },
    /// Priority scheduling, non-preemptive.
    Priority,
    /// Priority scheduling, preemptive.
    PriorityPreemptive,
}

impl Algorithm {
    /// All six algorithms, with the given quantum for Round Robin.
    pub fn all(quantum: u32) -> [Algorithm; 6] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srtf,
            Algorithm::RoundRobin { quantum },
            Algorithm::Priority,
            Algorithm::PriorityPreemptive,
        ]
    }

    /// The strategy implementing this algorithm.
    pub fn strategy(&self) -> Box<dyn Strategy> {
        match *self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
            Algorithm::Priority => Box::new(PriorityScheduling::non_preemptive()),
            Algorithm::PriorityPreemptive => Box::new(PriorityScheduling::preemptive()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Sjf => write!(f, "SJF"),
            Algorithm::Srtf => write!(f, "SRTF"),
            Algorithm::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            Algorithm::Priority => write!(f, "Priority"),
            Algorithm::PriorityPreemptive => write!(f, "Priority (Preemptive)"),
        }
    }
}

/// Runs the selected algorithm over the process set.
///
/// Thin dispatch over [`Algorithm::strategy`].
pub fn simulate(
    algorithm: Algorithm,
    processes: &[Process],
) -> Result<SimulationResult, SchedulerError> {
    algorithm.strategy().simulate(processes)
}

/// Runs every algorithm over independent copies of the same input and
/// returns each one's KPI row.
///
/// `quantum` applies to the Round Robin entry only. Fails on the first
/// rejected request (the input is validated identically by every
/// strategy, so in practice either all run or none do).
pub fn compare(
    processes: &[Process],
    quantum: u32,
) -> Result<Vec<(Algorithm, SimulationKpi)>, SchedulerError> {
    Algorithm::all(quantum)
        .into_iter()
        .map(|algorithm| {
            let result = simulate(algorithm, processes)?;
            Ok((algorithm, SimulationKpi::calculate(&result)))
        })
        .collect()
}

/// Working copy of one process inside a simulation loop.
///
/// Carries the input position (`idx`) so tie-breaking and completion
/// write-back stay explicit; `remaining` is only decremented by the
/// preemptive strategies.
#[derive(Debug, Clone)]
pub(crate) struct Job {
    pub(crate) idx: usize,
    pub(crate) pid: u32,
    pub(crate) arrival: u32,
    pub(crate) burst: u32,
    pub(crate) priority: i32,
    pub(crate) remaining: u32,
}

/// Snapshots the input into working copies sorted by
/// `(arrival time, input position)`.
pub(crate) fn intake(processes: &[Process]) -> Vec<Job> {
    let mut jobs: Vec<Job> = processes
        .iter()
        .enumerate()
        .map(|(idx, p)| Job {
            idx,
            pid: p.pid,
            arrival: p.arrival_time,
            burst: p.burst_time,
            priority: p.priority,
            remaining: p.burst_time,
        })
        .collect();
    jobs.sort_by_key(|j| (j.arrival, j.idx));
    jobs
}

/// Completion times recorded by input position and merged back into the
/// caller's order at the end of a run.
///
/// Position indexing keeps the merge total: every input process gets
/// exactly one output record, matched through its stable position/PID.
#[derive(Debug)]
pub(crate) struct CompletionLog {
    times: Vec<u32>,
}

impl CompletionLog {
    pub(crate) fn new(count: usize) -> Self {
        Self {
            times: vec![0; count],
        }
    }

    /// Records the completion time of the process at input position `idx`.
    pub(crate) fn finish(&mut self, idx: usize, completion_time: u32) {
        self.times[idx] = completion_time;
    }

    /// Produces the completed records in the caller's input order.
    pub(crate) fn merge(&self, processes: &[Process]) -> Vec<CompletedProcess> {
        processes
            .iter()
            .zip(&self.times)
            .map(|(p, &t)| CompletedProcess::finish(p, t))
            .collect()
    }
}
