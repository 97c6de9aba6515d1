//! Benchmarks for covering-table reduction.
//!
//! Run with:
//! ```bash
//! cargo bench --bench cover
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qm_cover::bitvec::BitVector;
use qm_cover::table::CoverTable;

fn letter(var: usize, value: bool) -> char {
    let c = (b'a' + var as u8) as char;
    if value {
        c
    } else {
        c.to_ascii_uppercase()
    }
}

/// Every minterm of `num_vars` variables in Gray-code order, plus one implicant per
/// pair of neighbours: a single cyclic core of `2^num_vars` rows and columns.
fn gray_ring(num_vars: usize) -> (Vec<String>, Vec<String>) {
    let n = 1usize << num_vars;
    let gray = |i: usize| i ^ (i >> 1);
    let minterms = (0..n)
        .map(|i| (0..num_vars).map(|k| letter(k, (gray(i) >> k) & 1 == 1)).collect())
        .collect();
    let implicants = (0..n)
        .map(|i| {
            let a = gray(i);
            let free = (a ^ gray((i + 1) % n)).trailing_zeros() as usize;
            (0..num_vars)
                .filter(|&k| k != free)
                .map(|k| letter(k, (a >> k) & 1 == 1))
                .collect()
        })
        .collect();
    (implicants, minterms)
}

// ============================================================================
// Benchmark: table construction
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/build");

    for num_vars in [4, 6, 8] {
        let (implicants, minterms) = gray_ring(num_vars);
        group.throughput(Throughput::Elements((implicants.len() * minterms.len()) as u64));
        group.bench_with_input(
            BenchmarkId::new("gray_ring", num_vars),
            &(implicants, minterms),
            |b, (implicants, minterms)| {
                b.iter(|| CoverTable::new(num_vars, implicants, minterms));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: reduction of a cyclic core
// ============================================================================

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/minimize");

    for num_vars in [3, 5, 7] {
        let (implicants, minterms) = gray_ring(num_vars);
        let table = CoverTable::new(num_vars, &implicants, &minterms).expect("valid table");
        group.bench_with_input(BenchmarkId::new("gray_ring", num_vars), &table, |b, table| {
            b.iter(|| table.minimize());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: bit vector algebra
// ============================================================================

fn bench_bitvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitvec/intersection");

    for size in [64, 1024, 16384] {
        let a = BitVector::from_indices(size, (0..size).step_by(3));
        let b = BitVector::from_indices(size, (0..size).step_by(5));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &(a, b), |bench, (a, b)| {
            bench.iter(|| a.intersection(b).cardinality());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_minimize, bench_bitvec);

criterion_main!(benches);
