//! Benchmarks for roster parsing.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use roster::parser::classify_line;
use roster::{parse_army, parse_army_with, render_army, ParseOptions};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let source = load_fixture("sororitas.txt");

    // A large roster: the fixture's units repeated many times over
    let body: String = source.lines().skip(4).map(|l| format!("{l}\n")).collect();
    let large = format!("{}{}", source, body.repeat(200));

    group.bench_function("classify_line", |b| {
        b.iter(|| classify_line(black_box("Battle Sisters Squad (100 Points)"), true))
    });

    group.bench_function("parse_fixture", |b| b.iter(|| parse_army(black_box(&source))));

    group.bench_function("parse_fixture_vehicles", |b| {
        b.iter(|| parse_army_with(black_box(&source), &ParseOptions::with_vehicles()))
    });

    group.bench_function("parse_large", |b| b.iter(|| parse_army(black_box(&large))));

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let army = parse_army(&load_fixture("sororitas.txt"));

    c.bench_function("render_fixture", |b| b.iter(|| render_army(black_box(&army))));
}

criterion_group!(benches, bench_parsing, bench_rendering);
criterion_main!(benches);
