//! End-to-end engine tests.
//!
//! Runs the textbook scenarios through the public API: strategy
//! dispatch, cross-algorithm comparison, workload generation, and the
//! serialized result shape consumed by presentation layers.

use cpu_sched::models::Process;
use cpu_sched::sim::{compare, simulate, Algorithm, SimulationKpi};
use cpu_sched::workload::WorkloadGenerator;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn textbook_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 7).with_priority(2),
        Process::new(2, 2, 4).with_priority(1),
        Process::new(3, 4, 1).with_priority(3),
        Process::new(4, 5, 4).with_priority(2),
    ]
}

#[test]
fn fcfs_textbook_run() {
    let result = simulate(Algorithm::Fcfs, &textbook_processes()).unwrap();
    let completions: Vec<u32> = result.processes.iter().map(|p| p.completion_time).collect();
    assert_eq!(completions, vec![7, 11, 12, 16]);
    assert_eq!(result.total_time, 16);
}

#[test]
fn sjf_prefers_short_ready_jobs() {
    let result = simulate(Algorithm::Sjf, &textbook_processes()).unwrap();
    // After P1 finishes at 7, P3 (burst 1) jumps ahead of P2 and P4
    let order: Vec<u32> = result.timeline.slices().iter().map(|s| s.pid).collect();
    assert_eq!(order, vec![1, 3, 2, 4]);
}

#[test]
fn srtf_beats_sjf_on_average_waiting() {
    let procs = textbook_processes();
    let sjf = SimulationKpi::calculate(&simulate(Algorithm::Sjf, &procs).unwrap());
    let srtf = SimulationKpi::calculate(&simulate(Algorithm::Srtf, &procs).unwrap());
    assert!(srtf.avg_waiting_time <= sjf.avg_waiting_time);
}

#[test]
fn all_algorithms_agree_on_total_work() {
    let procs = textbook_processes();
    for algorithm in Algorithm::all(3) {
        let result = simulate(algorithm, &procs).unwrap();
        assert_eq!(result.timeline.busy_time(), 16, "{algorithm}");
        assert_eq!(result.processes.len(), 4, "{algorithm}");
    }
}

#[test]
fn comparison_reports_one_row_per_algorithm() {
    let rows = compare(&textbook_processes(), 2).unwrap();
    assert_eq!(rows.len(), 6);
    for (algorithm, kpi) in rows {
        assert!(kpi.throughput > 0.0, "{algorithm}");
        assert!(kpi.avg_turnaround_time >= kpi.avg_waiting_time, "{algorithm}");
    }
}

#[test]
fn generated_workloads_simulate_under_every_algorithm() {
    let mut rng = SmallRng::seed_from_u64(99);
    let procs = WorkloadGenerator::new().generate(12, &mut rng);
    for algorithm in Algorithm::all(2) {
        let result = simulate(algorithm, &procs).unwrap();
        assert_eq!(result.processes.len(), 12);
    }
}

#[test]
fn result_serializes_with_consumer_facing_fields() {
    let result = simulate(Algorithm::Fcfs, &textbook_processes()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total_time"], 16);
    assert_eq!(json["processes"].as_array().unwrap().len(), 4);
    let first = &json["processes"][0];
    assert_eq!(first["pid"], 1);
    assert_eq!(first["completion_time"], 7);
    assert_eq!(first["turnaround_time"], 7);
    assert_eq!(first["waiting_time"], 0);
    let slice = &json["timeline"]["slices"][0];
    assert_eq!(slice["pid"], 1);
    assert_eq!(slice["start"], 0);
    assert_eq!(slice["duration"], 7);
}

#[test]
fn algorithm_round_trips_through_serde() {
    let algorithm = Algorithm::RoundRobin { quantum: 4 };
    let json = serde_json::to_string(&algorithm).unwrap();
    let back: Algorithm = serde_json::from_str(&json).unwrap();
    assert_eq!(back, algorithm);
}

#[test]
fn unknown_algorithm_is_a_deserialization_error() {
    // Dispatch is a thin selector; a bad identifier fails at the boundary
    assert!(serde_json::from_str::<Algorithm>(r#""Hrrn""#).is_err());
}
