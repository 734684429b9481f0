use criterion::{Criterion, black_box, criterion_group, criterion_main};
use html::perf_fixtures::{make_blocks, make_rawtext_adversarial};
use html::{Tokenizer, tokenize};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

fn bench_tokenize_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_tokenize_small", |b| {
        b.iter(|| {
            let stream = tokenize(black_box(&input));
            black_box(stream.len());
        });
    });
}

fn bench_tokenize_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_tokenize_large", |b| {
        b.iter(|| {
            let stream = tokenize(black_box(&input));
            black_box(stream.len());
        });
    });
}

fn bench_count_lazily_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_count_lazily_large", |b| {
        b.iter(|| {
            let count = Tokenizer::new(black_box(&input)).count();
            black_box(count);
        });
    });
}

fn bench_tokenize_rawtext_adversarial(c: &mut Criterion) {
    let input = make_rawtext_adversarial(512 * 1024);
    c.bench_function("bench_tokenize_rawtext_adversarial", |b| {
        b.iter(|| {
            let stream = tokenize(black_box(&input));
            black_box(stream.len());
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize_small,
    bench_tokenize_large,
    bench_count_lazily_large,
    bench_tokenize_rawtext_adversarial
);
criterion_main!(benches);
