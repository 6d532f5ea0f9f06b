//! Cross-algorithm simulation properties.
//!
//! Checks the invariants every strategy must uphold, over generated
//! inputs: CPU time conservation, output completeness, non-negative
//! timings, timeline contiguity and coalescing, throughput consistency,
//! and deterministic re-simulation.

use std::collections::HashSet;

use cpu_sched::models::Process;
use cpu_sched::sim::{simulate, Algorithm, SimulationKpi};
use proptest::prelude::*;

fn arb_processes() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u32..20, 1u32..12, 0i32..8), 1..10).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(i as u32 + 1, arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Fcfs),
        Just(Algorithm::Sjf),
        Just(Algorithm::Srtf),
        (1u32..5).prop_map(|quantum| Algorithm::RoundRobin { quantum }),
        Just(Algorithm::Priority),
        Just(Algorithm::PriorityPreemptive),
    ]
}

proptest! {
    #[test]
    fn cpu_time_is_conserved(
        processes in arb_processes(),
        algorithm in arb_algorithm(),
    ) {
        let result = simulate(algorithm, &processes).unwrap();
        let total_burst: u32 = processes.iter().map(|p| p.burst_time).sum();
        prop_assert_eq!(result.timeline.busy_time(), total_burst);
    }

    #[test]
    fn every_process_completes_exactly_once(
        processes in arb_processes(),
        algorithm in arb_algorithm(),
    ) {
        let result = simulate(algorithm, &processes).unwrap();
        prop_assert_eq!(result.processes.len(), processes.len());

        let in_pids: HashSet<u32> = processes.iter().map(|p| p.pid).collect();
        let out_pids: HashSet<u32> = result.processes.iter().map(|p| p.pid).collect();
        prop_assert_eq!(out_pids.len(), result.processes.len());
        prop_assert_eq!(in_pids, out_pids);

        for done in &result.processes {
            prop_assert_eq!(
                done.turnaround_time,
                done.completion_time - done.arrival_time
            );
            prop_assert_eq!(done.waiting_time, done.turnaround_time - done.burst_time);
        }
    }

    #[test]
    fn timings_are_non_negative(
        processes in arb_processes(),
        algorithm in arb_algorithm(),
    ) {
        let result = simulate(algorithm, &processes).unwrap();
        for done in &result.processes {
            prop_assert!(done.turnaround_time >= done.burst_time);
            prop_assert!(done.completion_time >= done.arrival_time + done.burst_time);
        }
    }

    #[test]
    fn timeline_is_contiguous_and_coalesced(
        processes in arb_processes(),
        algorithm in arb_algorithm(),
    ) {
        let result = simulate(algorithm, &processes).unwrap();
        for window in result.timeline.slices().windows(2) {
            // Ordered, never overlapping
            prop_assert!(window[0].end() <= window[1].start);
            // A shared boundary between same-pid slices would mean a
            // missed coalesce
            if window[0].end() == window[1].start {
                prop_assert_ne!(window[0].pid, window[1].pid);
            }
        }
        if !result.timeline.is_empty() {
            prop_assert_eq!(result.timeline.span(), result.total_time);
        }
    }

    #[test]
    fn throughput_matches_definition(
        processes in arb_processes(),
        algorithm in arb_algorithm(),
    ) {
        let result = simulate(algorithm, &processes).unwrap();
        let kpi = SimulationKpi::calculate(&result);
        prop_assert!(result.total_time > 0);
        let expected = result.processes.len() as f64 / result.total_time as f64;
        prop_assert_eq!(kpi.throughput, expected);
    }

    #[test]
    fn resimulation_is_identical(
        processes in arb_processes(),
        algorithm in arb_algorithm(),
    ) {
        let copy = processes.clone();
        let first = simulate(algorithm, &processes).unwrap();
        let second = simulate(algorithm, &copy).unwrap();
        prop_assert_eq!(first, second);
    }
}
