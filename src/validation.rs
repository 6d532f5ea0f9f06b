//! Input validation for simulation requests.
//!
//! Checks the structural integrity of a process set before any strategy
//! runs. Detects:
//! - Zero burst times (no defined completion)
//! - Zero PIDs (identifiers must be positive)
//! - Duplicate PIDs
//!
//! An empty process set is valid: strategies answer it with an empty
//! result rather than an error.

use std::collections::HashSet;

use crate::error::SchedulerError;
use crate::models::Process;

/// Validation result: `Ok(())` or every detected problem.
pub type ValidationResult = Result<(), Vec<SchedulerError>>;

/// Validates a process set for simulation.
///
/// Checks:
/// 1. Every PID is positive
/// 2. Every burst time is at least 1
/// 3. No two processes share a PID
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let errors = collect_errors(processes);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// First detected problem, if any. Strategies use this to fail fast.
pub fn first_error(processes: &[Process]) -> Option<SchedulerError> {
    collect_errors(processes).into_iter().next()
}

fn collect_errors(processes: &[Process]) -> Vec<SchedulerError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if p.pid == 0 {
            errors.push(SchedulerError::InvalidPid);
        }
        if p.burst_time == 0 {
            errors.push(SchedulerError::ZeroBurst { pid: p.pid });
        }
        if !seen.insert(p.pid) {
            errors.push(SchedulerError::DuplicatePid { pid: p.pid });
        }
    }

    errors
}
