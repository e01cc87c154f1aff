use criterion::{criterion_group, criterion_main, Criterion};
use np_bench::hamilton::graph::GraphInstance;
use np_bench::harness::generate::{graph_instances, sat_instances, GraphParams, SatParams};
use np_bench::sat::cnf::CnfInstance;
use np_bench::strategy::Strategy;
use np_bench::{hamilton, sat};
use std::hint::black_box;
use std::time::Duration;

fn random_3sat() -> Vec<CnfInstance> {
    // Close to the satisfiability threshold, so both outcomes show up.
    sat_instances(&SatParams {
        count: 20,
        vars: 12,
        clauses: 51,
        width: 3,
        seed: 42,
    })
    .unwrap_or_else(|e| panic!("failed to generate 3-SAT instances: {e}"))
}

fn random_graphs(vertices: usize, density: f64) -> Vec<GraphInstance> {
    graph_instances(&GraphParams {
        count: 10,
        vertices,
        density,
        seed: 42,
    })
    .unwrap_or_else(|e| panic!("failed to generate graphs: {e}"))
}

fn bench_sat(c: &mut Criterion) {
    let cnfs = random_3sat();

    let mut group = c.benchmark_group("3sat - strategy");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(10));

    for strategy in [Strategy::BruteForce, Strategy::Backtracking] {
        group.bench_function(strategy.label(), |b| {
            b.iter(|| {
                for cnf in &cnfs {
                    black_box(sat::solver::solve(strategy, cnf).ok());
                }
            })
        });
    }

    group.finish();
}

fn bench_hamilton(c: &mut Criterion) {
    let sparse = random_graphs(7, 0.35);
    let dense = random_graphs(7, 0.7);

    for (name, graphs) in [("sparse", &sparse), ("dense", &dense)] {
        let mut group = c.benchmark_group(format!("hamilton {name} - strategy"));
        group.sample_size(50);
        group.measurement_time(Duration::from_secs(10));

        for strategy in [Strategy::BruteForce, Strategy::Backtracking] {
            group.bench_function(strategy.label(), |b| {
                b.iter(|| {
                    for graph in graphs {
                        black_box(hamilton::solver::solve(strategy, graph).ok());
                    }
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sat, bench_hamilton);

criterion_main!(benches);
