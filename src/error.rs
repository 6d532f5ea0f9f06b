//! Error type for simulation requests.
//!
//! Every error is a definitive rejection of the call: the simulation is
//! deterministic and pure, so nothing is retried and no partial result is
//! produced. Each variant carries enough detail to identify the offending
//! process or parameter.

use thiserror::Error;

/// Reasons a simulation request is rejected before it runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Round Robin needs a quantum of at least one time unit.
    #[error("time quantum must be at least 1, got {quantum}")]
    InvalidQuantum { quantum: u32 },

    /// A process that needs no CPU time has no defined completion.
    #[error("process {pid} has a zero burst time")]
    ZeroBurst { pid: u32 },

    /// PIDs are positive integers; 0 is reserved as "no process".
    #[error("process identifiers must be positive, got 0")]
    InvalidPid,

    /// Two input processes share an identifier.
    #[error("duplicate process identifier: {pid}")]
    DuplicatePid { pid: u32 },
}
