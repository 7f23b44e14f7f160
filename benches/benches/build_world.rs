// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_world::{Rectangle, build_world};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn gen_flat_rects(n: usize) -> Vec<Rectangle> {
    // Disjoint cells: the all-pairs scan never finds a container.
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let x0 = i as f64 * 20.0;
        out.push(Rectangle::from_xywh(format!("cell_{i}"), x0, 0.0, 10.0, 10.0));
    }
    out
}

fn gen_nested_rects(n: usize) -> Vec<Rectangle> {
    // Concentric rectangles: every rectangle contains all smaller ones, so
    // ancestor lists and the insertion chain are as long as they can get.
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let inset = i as f64;
        let size = (n as f64 + 1.0 - inset) * 2.0;
        out.push(Rectangle::from_xywh(
            format!("ring_{i}"),
            inset,
            inset,
            size,
            size,
        ));
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gen_village_rects(houses: usize) -> Vec<Rectangle> {
    // Houses containing rooms containing one piece of furniture each, laid
    // out on a jittered grid. Roughly the shape of real map input.
    let mut rng = Rng::new(0x5eed);
    let mut out = Vec::new();
    for h in 0..houses {
        let hx = h as f64 * 1600.0 + rng.next_f64() * 50.0;
        let hy = rng.next_f64() * 50.0;
        out.push(Rectangle::from_xywh(
            format!("house_{h}"),
            hx,
            hy,
            1500.0,
            700.0,
        ));
        for r in 0..4 {
            let rx = hx + 20.0 + r as f64 * 360.0;
            let ry = hy + 20.0;
            out.push(Rectangle::from_xywh(
                format!("house_{h}_room_{r}"),
                rx,
                ry,
                340.0,
                500.0,
            ));
            out.push(Rectangle::from_xywh(
                format!("house_{h}_room_{r}_bed"),
                rx + 30.0 + rng.next_f64() * 20.0,
                ry + 30.0 + rng.next_f64() * 20.0,
                120.0,
                80.0,
            ));
        }
    }
    out
}

fn bench_build_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_world/flat");
    for n in [64_usize, 256] {
        let rects = gen_flat_rects(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| black_box(build_world(black_box(&rects)).unwrap()));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("build_world/nested");
    for n in [64_usize, 256] {
        let rects = gen_nested_rects(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| black_box(build_world(black_box(&rects)).unwrap()));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("build_world/village");
    for houses in [4_usize, 16] {
        let rects = gen_village_rects(houses);
        group.throughput(Throughput::Elements(rects.len() as u64));
        group.bench_function(format!("houses={houses}"), |b| {
            b.iter(|| black_box(build_world(black_box(&rects)).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_world);
criterion_main!(benches);
