// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hullscope::config::DelaunayConfig;
use hullscope::geometry::Point2;
use hullscope::operations::hull::{HistoryPlayer, convex_hull_of_points};
use hullscope::operations::triangulation::triangulate_points;

fn random_cloud(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)))
        .collect()
}

/// Points on a circle: every point is on the hull.
fn circle(n: usize) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * 2.0 * std::f64::consts::PI;
            Point2::new(50.0 * t.cos(), 50.0 * t.sin())
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");

    for size in [100, 1000, 10000] {
        let cloud = random_cloud(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("random", size), &cloud, |b, pts| {
            b.iter(|| convex_hull_of_points(black_box(pts)))
        });

        let ring = circle(size);
        group.bench_with_input(BenchmarkId::new("circle", size), &ring, |b, pts| {
            b.iter(|| convex_hull_of_points(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull_history");

    for size in [100, 1000] {
        let run = convex_hull_of_points(&random_cloud(size, 11));
        group.bench_with_input(BenchmarkId::new("record", size), &run, |b, run| {
            b.iter(|| black_box(run).history())
        });

        let history = run.history();
        group.bench_with_input(BenchmarkId::new("replay", size), &history, |b, h| {
            b.iter(|| {
                let mut player = HistoryPlayer::new(h.clone());
                while player.next() {}
                while player.prev() {}
                player
            })
        });
    }

    group.finish();
}

fn bench_delaunay(c: &mut Criterion) {
    let mut group = c.benchmark_group("delaunay");
    group.sample_size(20);
    let config = DelaunayConfig::default();

    // Bowyer-Watson here scans every triangle per insertion
    for size in [50, 200, 1000] {
        let cloud = random_cloud(size, 3);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("random", size), &cloud, |b, pts| {
            b.iter(|| triangulate_points(black_box(pts), black_box(&config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hull, bench_history, bench_delaunay);
criterion_main!(benches);
