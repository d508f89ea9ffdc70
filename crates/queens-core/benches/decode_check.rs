use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use queens_core::conflict::is_accepted;
use queens_core::partition::count_all;
use queens_core::permutation::PermutationDecoder;

fn decode_and_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_check");
    for board_size in [8usize, 12, 16] {
        let mut decoder = PermutationDecoder::new(board_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(board_size),
            &board_size,
            |b, _| {
                let mut index = 0u64;
                b.iter(|| {
                    index = index.wrapping_add(7919) % 40_320;
                    black_box(is_accepted(decoder.decode(black_box(index))))
                })
            },
        );
    }
    group.finish();
}

fn full_scan(c: &mut Criterion) {
    c.bench_function("count_all_7", |b| b.iter(|| black_box(count_all(black_box(7)))));
}

criterion_group!(benches, decode_and_check, full_scan);
criterion_main!(benches);
