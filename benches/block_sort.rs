use blocksort::{bwt_decode, bwt_encode, mtf_encode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BLOCK_SIZES: &[usize] = &[4_096, 65_536, 262_144];

fn create_block(seed: u64, len: usize, alphabet: u64) -> Vec<u8> {
    // Simple LCG for reproducible pseudo-random data
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) % alphabet) as u8
        })
        .collect()
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("BWT forward");
    for &len in BLOCK_SIZES {
        let text = create_block(42, len, 26);
        let dna = create_block(7, len, 4);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("alpha26", len), &text, |b, block| {
            b.iter(|| bwt_encode(black_box(block)))
        });
        group.bench_with_input(BenchmarkId::new("alpha4", len), &dna, |b, block| {
            b.iter(|| bwt_encode(black_box(block)))
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("BWT inverse");
    for &len in BLOCK_SIZES {
        let (first, bwt) = bwt_encode(&create_block(42, len, 26));
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("alpha26", len), &bwt, |b, bwt| {
            b.iter(|| bwt_decode(first, black_box(bwt)))
        });
    }
    group.finish();
}

fn bench_mtf(c: &mut Criterion) {
    let mut group = c.benchmark_group("MTF encode");
    for &len in BLOCK_SIZES {
        let block = create_block(3, len, 256);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("random", len), &block, |b, block| {
            b.iter(|| mtf_encode(black_box(block)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse, bench_mtf);
criterion_main!(benches);
