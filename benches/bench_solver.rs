use criterion::{criterion_group, criterion_main, Criterion};

use kociemba::cubie::CubieCube;
use kociemba::moves::Move::*;
use kociemba::scramble::random_scramble;
use kociemba::solver::{solve, SolveOptions, Tables};

fn cc_apply_moves() {
    let cc = CubieCube::default();
    let _ = cc.apply_moves(&vec![R, U, R3, U3]);
}

fn cc_multi_moves() {
    let mut cc = CubieCube::default();
    cc.multiply_moves(&vec![R, U, R3, U3]);
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube Moves");
    group.bench_function("multiply_moves", |b| b.iter(|| cc_multi_moves()));
    group.bench_function("apply_moves", |b| b.iter(|| cc_apply_moves()));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let tables = Tables::new().expect("table construction is a fixed deterministic computation");
    let options = SolveOptions::default();
    let scrambles: Vec<CubieCube> = (0..5)
        .map(|_| CubieCube::solved().apply_moves(&random_scramble(25)))
        .collect();

    let mut i = 0;
    c.bench_function("Solver", |b| {
        b.iter(|| {
            let cube = &scrambles[i % scrambles.len()];
            i += 1;
            solve(cube, &tables, &options).unwrap()
        })
    });
}

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("Tables::new", |b| b.iter(|| Tables::new().unwrap()));
}

criterion_group!(benches, bench_solver, bench_moves, bench_table_construction);
criterion_main!(benches);
