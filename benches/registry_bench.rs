use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use problem_registry::{
    Irritant, ProblemKind, category_of, category_of_id,
    irritant::tokens::{WARNING_TOKENS, irritant_to_token, token_to_irritants},
    option_for,
    problem::kind_of_id,
    validate::Validator,
};

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/classify");
    group.throughput(Throughput::Elements(ProblemKind::COUNT as u64));

    group.bench_function("category_of", |b| {
        b.iter(|| {
            for kind in ProblemKind::ALL {
                black_box(category_of(black_box(*kind)));
            }
        })
    });
    group.bench_function("category_of_id", |b| {
        b.iter(|| {
            for kind in ProblemKind::ALL {
                black_box(category_of_id(black_box(kind.id())));
            }
        })
    });
    group.bench_function("option_for", |b| {
        b.iter(|| {
            for kind in ProblemKind::ALL {
                black_box(option_for(black_box(*kind)));
            }
        })
    });
    group.bench_function("kind_of_id", |b| {
        b.iter(|| {
            for kind in ProblemKind::ALL {
                black_box(kind_of_id(black_box(kind.id())));
            }
        })
    });
    group.finish();
}

fn bench_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/tokens");
    for token in ["all", "unused", "deprecation"] {
        group.bench_with_input(BenchmarkId::new("token_to_irritants", token), token, |b, token| {
            b.iter(|| black_box(token_to_irritants(black_box(token))))
        });
    }
    group.bench_function("irritant_to_token/grid", |b| {
        b.iter(|| {
            for irritant in Irritant::grid() {
                black_box(irritant_to_token(black_box(irritant)));
            }
        })
    });
    group.throughput(Throughput::Elements(WARNING_TOKENS.len() as u64));
    group.bench_function("token_to_irritants/declared", |b| {
        b.iter(|| {
            for token in WARNING_TOKENS {
                black_box(token_to_irritants(black_box(token)));
            }
        })
    });
    group.finish();
}

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/validate");
    group.sample_size(20);
    group.bench_function("inspect", |b| {
        b.iter(|| black_box(Validator::for_registry().inspect()))
    });
    group.finish();
}

criterion_group!(benches, bench_classification, bench_tokens, bench_validator);
criterion_main!(benches);
