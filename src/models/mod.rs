//! Simulation domain models.
//!
//! Input records ([`Process`]), output records ([`CompletedProcess`]),
//! the coalescing execution timeline ([`Timeline`], [`GanttSlice`]), and
//! the combined [`SimulationResult`] produced by every strategy.

mod process;
mod result;
mod timeline;

pub use process::{CompletedProcess, Process};
pub use result::SimulationResult;
pub use timeline::{GanttSlice, Timeline};
