//! Solver and full-pipeline throughput on synthetic availability.

use chrono::NaiveTime;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use match_engine::{schedule, solve, AvailabilitySlot, CompatibilityGraph, Interval, Participant, ScheduleRequest};
use std::hint::black_box;

fn clock(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60 % 24, minutes % 60, 0).unwrap()
}

/// Deterministic, unevenly spread half-hour to two-hour windows.
fn window(seed: u32) -> (NaiveTime, NaiveTime) {
    let start = 8 * 60 + (seed.wrapping_mul(37) % 600);
    let len = 30 + (seed.wrapping_mul(11) % 90);
    (clock(start), clock(start + len))
}

fn pool(size: u32, salt: u32, recruiter: bool) -> Vec<Participant> {
    (0..size)
        .map(|i| {
            let base = if recruiter {
                Participant::recruiter(format!("r{i}"))
            } else {
                Participant::candidate(format!("c{i}"))
            };
            (0..3).fold(base, |p, k| {
                let (start, end) = window(i * 7 + k * 13 + salt);
                p.with_interval(Interval::normalize(start, end).unwrap())
            })
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for size in [50u32, 200, 800] {
        let graph = CompatibilityGraph::build(pool(size, 1, true), pool(size, 5, false));
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| solve(black_box(graph)))
        });
    }
    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let slots = |prefix: &str, salt: u32| -> Vec<AvailabilitySlot> {
        (0..200u32)
            .map(|i| {
                let (start, end) = window(i * 3 + salt);
                AvailabilitySlot::new(format!("{prefix}{}", i / 2), start, end)
            })
            .collect()
    };
    let request = ScheduleRequest {
        recruiters: slots("r", 2),
        candidates: slots("c", 9),
    };

    c.bench_function("schedule_200_slots", |b| {
        b.iter(|| schedule(black_box(request.clone())).unwrap())
    });
}

criterion_group!(benches, bench_solve, bench_schedule);
criterion_main!(benches);
