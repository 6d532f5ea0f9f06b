//! Simulation result model.
//!
//! The output of one strategy run: every input process completed, the
//! coalesced execution timeline, and the total simulated time.

use serde::{Deserialize, Serialize};

use super::{CompletedProcess, Timeline};

/// Outcome of running one scheduling strategy over a process set.
///
/// `total_time` equals the completion time of the last-finishing process
/// and, for a non-empty timeline, the end of its final slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// All input processes, completed, in the caller's input order.
    pub processes: Vec<CompletedProcess>,
    /// CPU-allocation timeline (idle gaps absent).
    pub timeline: Timeline,
    /// End of the simulation; 0 for an empty input.
    pub total_time: u32,
}

impl SimulationResult {
    /// Creates a result from its parts.
    pub fn new(processes: Vec<CompletedProcess>, timeline: Timeline, total_time: u32) -> Self {
        Self {
            processes,
            timeline,
            total_time,
        }
    }

    /// The empty result returned for an empty input set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Finds a completed process by identifier.
    pub fn process(&self, pid: u32) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
