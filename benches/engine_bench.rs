// ABOUTME: Criterion benchmarks for the pace conversion engine and calculator state
// ABOUTME: Measures pace/finish-time conversion, treadmill conversion and full state evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the conversion engine.
//!
//! Every slider movement in a front end triggers a full re-evaluation, so
//! these cover both the individual conversions and a whole slider sweep.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pace_assistant::engine::{
    duration_from_pace, pace_from_duration, split_minutes, treadmill_to_road_pace,
};
use pace_assistant::state::CalculatorState;
use pace_assistant::validation::pace_range_seconds;
use pace_assistant::{Pace, RaceDistance, Speed, UnitSystem};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");
    let distance = RaceDistance::FullMarathon.distance(UnitSystem::Kilometer);

    group.bench_function("pace_from_duration", |b| {
        b.iter(|| pace_from_duration(black_box(210.0), black_box(distance)));
    });
    group.bench_function("duration_from_pace", |b| {
        b.iter(|| duration_from_pace(black_box(300.0), black_box(distance)));
    });
    group.bench_function("treadmill_to_road_pace", |b| {
        let speed = Speed::new(10.0, UnitSystem::Kilometer);
        b.iter(|| treadmill_to_road_pace(black_box(speed)));
    });
    group.bench_function("split_minutes", |b| {
        b.iter(|| split_minutes(black_box(3.999)));
    });

    group.finish();
}

fn bench_slider_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider_sweep");

    for unit in UnitSystem::ALL {
        let range = pace_range_seconds(unit);
        let steps = u64::from(range.end() - range.start() + 1);
        group.throughput(Throughput::Elements(steps));
        group.bench_with_input(BenchmarkId::new("pace", unit), &unit, |b, &unit| {
            let state = CalculatorState::new(RaceDistance::FullMarathon, unit);
            b.iter(|| {
                for seconds in pace_range_seconds(unit) {
                    let evaluation = state
                        .with_pace(Pace::from_seconds(f64::from(seconds), unit))
                        .evaluate();
                    black_box(evaluation.finish_time.to_string());
                }
            });
        });
    }

    group.finish();
}

fn bench_unit_toggle(c: &mut Criterion) {
    c.bench_function("unit_toggle_evaluate", |b| {
        let state = CalculatorState::default();
        b.iter(|| {
            black_box(state)
                .with_unit(UnitSystem::Mile)
                .with_unit(UnitSystem::Kilometer)
                .evaluate()
        });
    });
}

criterion_group!(
    benches,
    bench_conversions,
    bench_slider_sweep,
    bench_unit_toggle
);
criterion_main!(benches);
