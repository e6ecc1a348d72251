use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use duratypes::{format_duration, parse_duration};

const INPUTS: &[(&str, &str)] = &[
    ("compound_short", "30s"),
    ("compound_long", "1y2mo3w4d5h6m7s"),
    ("compound_words", "2 hours 30 minutes 15 seconds"),
    ("iso_time", "PT1H30M"),
    ("iso_full", "P1Y2M3W4DT5H6M7.5S"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, input) in INPUTS {
        group.bench_function(*name, |b| b.iter(|| parse_duration(black_box(input))));
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    for seconds in [45i64, 5_445, 40_042_567, i64::MAX] {
        group.bench_function(seconds.to_string(), |b| {
            b.iter(|| format_duration(black_box(seconds)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_format);
criterion_main!(benches);
