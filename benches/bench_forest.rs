use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use disjoint_forest::{Config, DisjointSetForest, Linking, PathCompression};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const CONFIGS: [(&str, Config); 4] = [
    ("first-root/none", Config::new().with_compression(PathCompression::None)),
    ("first-root/full", Config::new()),
    ("first-root/halving", Config::new().with_compression(PathCompression::Halving)),
    (
        "rank/full",
        Config::new().with_linking(Linking::ByRank),
    ),
];

fn random_pairs<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<(usize, usize)> {
    (0..count).map(|_| (rng.gen_range(0..len), rng.gen_range(0..len))).collect()
}

fn bench_random_unions(c: &mut Criterion) {
    let mut group = c.benchmark_group("random-unions");

    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    let len = 1 << 16;
    let unions = random_pairs(len, len, &mut rng);
    let queries = random_pairs(len, len, &mut rng);

    for (name, config) in CONFIGS {
        group.bench_with_input(BenchmarkId::new("unite-then-query", name), &config, |b, &config| {
            b.iter(|| {
                let mut forest = DisjointSetForest::with_config(len, config);
                for &(u, v) in &unions {
                    forest.unite(u, v).unwrap();
                }
                queries
                    .iter()
                    .filter(|&&(u, v)| forest.same_set(u, v).unwrap())
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_adversarial_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("adversarial-chain");

    let len = 1 << 12;

    for (name, config) in CONFIGS {
        group.bench_with_input(BenchmarkId::new("query-every-index", name), &config, |b, &config| {
            b.iter(|| {
                let mut forest = DisjointSetForest::with_config(len, config);
                // Each new root sits above the previous one.
                for i in 0..len - 1 {
                    forest.unite(i + 1, i).unwrap();
                }
                for i in 0..len {
                    black_box(forest.root(i).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_labels(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(0xF0_2E57);
    let len = 1 << 18;
    let mut forest = DisjointSetForest::with_config(
        len,
        Config::new().with_compression(PathCompression::None),
    );
    for (u, v) in random_pairs(len, len / 2, &mut rng) {
        forest.unite(u, v).unwrap();
    }

    c.bench_function("labels", |b| b.iter(|| black_box(forest.labels())));
}

criterion_group!(benches, bench_random_unions, bench_adversarial_chain, bench_labels);
criterion_main!(benches);
