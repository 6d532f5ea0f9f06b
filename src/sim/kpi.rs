//! Simulation quality metrics.
//!
//! Derives summary statistics from a completed [`SimulationResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean of per-process waiting times |
//! | Avg Turnaround Time | Mean of per-process turnaround times |
//! | Throughput | Completed processes per unit time (0 when total is 0) |
//! | Makespan | End of the simulation |
//! | CPU Utilization | Busy time / total time (< 1 with idle gaps) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.2

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Summary statistics for one strategy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Mean time processes spent ready but not running.
    pub avg_waiting_time: f64,
    /// Mean time from arrival to completion.
    pub avg_turnaround_time: f64,
    /// Completed processes per unit of simulated time.
    pub throughput: f64,
    /// End of the simulation (completion time of the last process).
    pub makespan: u32,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a completed simulation.
    ///
    /// An empty result yields all-zero metrics; throughput and
    /// utilization guard against a zero total time.
    pub fn calculate(result: &SimulationResult) -> Self {
        let count = result.processes.len();
        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            let waiting: u64 = result.processes.iter().map(|p| p.waiting_time as u64).sum();
            let turnaround: u64 = result
                .processes
                .iter()
                .map(|p| p.turnaround_time as u64)
                .sum();
            (waiting as f64 / count as f64, turnaround as f64 / count as f64)
        };

        let (throughput, cpu_utilization) = if result.total_time == 0 {
            (0.0, 0.0)
        } else {
            (
                count as f64 / result.total_time as f64,
                result.timeline.busy_time() as f64 / result.total_time as f64,
            )
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            throughput,
            makespan: result.total_time,
            cpu_utilization,
        }
    }
}
