//! Deterministic CPU process-scheduling simulator.
//!
//! Simulates the classic single-core scheduling algorithms over a set of
//! processes (arrival time, burst time, optional priority) and reports
//! per-process timing metrics together with a compact Gantt timeline of
//! CPU allocation intervals.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `CompletedProcess`,
//!   `GanttSlice`, `Timeline`, `SimulationResult`
//! - **`sim`**: The six algorithm strategies (FCFS, SJF, SRTF, Round
//!   Robin, priority scheduling in both variants), the `Algorithm`
//!   selector, and `SimulationKpi`
//! - **`validation`**: Input integrity checks (zero bursts, duplicate PIDs)
//! - **`workload`**: Random process-set generation for exercising the engine
//! - **`error`**: The crate error type
//!
//! # Architecture
//!
//! Every strategy is a pure function of its input: it snapshots the
//! process list, simulates on working copies, and returns a
//! [`models::SimulationResult`] without touching the caller's data. Runs
//! share no state, so the same input can be replayed across all
//! strategies for comparison.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Stallings (2018), "Operating Systems: Internals and Design Principles"

pub mod error;
pub mod models;
pub mod sim;
pub mod validation;
pub mod workload;
