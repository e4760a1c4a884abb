// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tokenline_layout::{TokenMeasure, compute_layout};
use tokenline_row::{Rgba8, Token, TokenRow};

const SPACING: f64 = 2.0;

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
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A row of `n` real badges plus the ellipsis slot, widths in a plausible
/// badge range.
fn gen_measures(n: usize) -> Vec<TokenMeasure> {
    let mut rng = Rng::new(0xBADC_0FFE_E0DD_F00D);
    let mut out = Vec::with_capacity(n + 1);
    for _ in 0..n {
        let name = 24.0 + rng.next_f64() * 40.0;
        let info = 12.0 + rng.next_f64() * 24.0;
        out.push(TokenMeasure::new(name + info, name));
    }
    out.push(TokenMeasure::new(20.0, 20.0));
    out
}

/// Upper bound on any candidate's extent: every badge full, every gap paid.
fn generous_width(measures: &[TokenMeasure]) -> f64 {
    let widths: f64 = measures.iter().map(|m| m.full_width).sum();
    widths + SPACING * measures.len() as f64
}

fn bench_search_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_fits");
    for &n in &[4_usize, 16, 64] {
        let measures = gen_measures(n);
        let available = generous_width(&measures);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("row_n{}", n), |b| {
            b.iter(|| {
                let layout = compute_layout(black_box(&measures), available, SPACING);
                black_box(layout.extent);
            })
        });
    }
    group.finish();
}

fn bench_search_degraded(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_degraded");
    for &n in &[4_usize, 16, 64] {
        let measures = gen_measures(n);
        // Roughly half the natural width lands the search mid-way through
        // the candidate walk.
        let available = generous_width(&measures) * 0.55;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("row_n{}", n), |b| {
            b.iter(|| {
                let layout = compute_layout(black_box(&measures), available, SPACING);
                black_box(layout.degradation);
            })
        });
    }
    group.finish();
}

fn bench_search_never_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_never_fits");
    for &n in &[4_usize, 16, 64] {
        let measures = gen_measures(n);
        group.throughput(Throughput::Elements(n as u64));
        // Zero width exhausts both phases: the full 2n candidate walk.
        group.bench_function(format!("row_n{}", n), |b| {
            b.iter(|| {
                let layout = compute_layout(black_box(&measures), 0.0, SPACING);
                black_box(layout.extent);
            })
        });
    }
    group.finish();
}

fn bench_report_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_storm");
    for &n in &[4_usize, 16, 64] {
        let measures = gen_measures(n);
        let available = generous_width(&measures) * 0.6;
        let tokens: Vec<Token> = (0..n)
            .map(|i| {
                Token::new(Rgba8::WHITE, Rgba8::GRAY)
                    .with_title("leg")
                    .with_info(if i % 2 == 0 { "32" } else { "477" })
            })
            .collect();
        // Every report recomputes; 2(n+1)+1 recomputes per pass.
        group.throughput(Throughput::Elements(2 * (n as u64 + 1) + 1));
        group.bench_function(format!("row_n{}", n), |b| {
            b.iter_batched(
                || TokenRow::new(tokens.clone()),
                |mut row| {
                    row.report_available_width(available);
                    for (slot, m) in measures.iter().enumerate() {
                        row.report_width(slot, m.full_width);
                        row.report_name_width(slot, m.name_width);
                    }
                    black_box(row.extent());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_search_fits,
    bench_search_degraded,
    bench_search_never_fits,
    bench_report_storm,
);
criterion_main!(benches);
