// Copyright 2025 the ecs-physics authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for component map operations
//!
//! Measures insert, random access, dense iteration and removal at several
//! population sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ecs_physics::ecs::components::Position;
use ecs_physics::ecs::{ComponentMap, Entity};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn populated(size: usize) -> ComponentMap<Position> {
    let mut map = ComponentMap::with_capacity(size);
    for id in 0..size as u64 {
        map.insert(Entity::new(id + 1), Position::new(id as f64, -(id as f64)));
    }
    map
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_map_insert");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut map = ComponentMap::new();
                for id in 0..size as u64 {
                    map.insert(Entity::new(id + 1), Position::new(id as f64, 0.0));
                }
                black_box(map)
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_map_random_access");
    for size in SIZES {
        let map = populated(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0.0;
                // Stride through ids out of insertion order.
                for id in (0..size as u64).rev() {
                    if let Some(position) = map.get(Entity::new(id + 1)) {
                        sum += position.0.x;
                    }
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_map_iteration");
    for size in SIZES {
        let map = populated(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0;
                for (_, position) in map.iter() {
                    sum += position.0.x + position.0.y;
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_map_remove");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || populated(size),
                |mut map| {
                    for id in 0..size as u64 {
                        map.remove(Entity::new(id + 1));
                    }
                    black_box(map)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    storage_benches,
    bench_insert,
    bench_random_access,
    bench_iteration,
    bench_remove
);
criterion_main!(storage_benches);
