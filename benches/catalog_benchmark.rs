use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use emo_stimuli::{
    SEXES, StimulusCatalog, StimulusName, TEST_CONDITIONS, TEST_EMOTIONS, TEST_UTTERANCE_IDS,
    generate_test_filenames,
};
use std::hint::black_box;

fn bench_catalog_construction(c: &mut Criterion) {
    c.bench_function("catalog_new", |b| {
        b.iter(|| black_box(StimulusCatalog::new().unwrap()))
    });
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_test_filenames");

    for utterances in [1usize, 2, 8, 32].iter() {
        let ids: Vec<String> = (0..*utterances).map(|i| format!("{}", 100 + i)).collect();
        let emotions: Vec<String> = TEST_EMOTIONS.iter().map(|s| s.to_string()).collect();
        let sexes: Vec<String> = SEXES.iter().map(|s| s.to_string()).collect();
        let conditions: Vec<String> = TEST_CONDITIONS.iter().map(|s| s.to_string()).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(utterances),
            &ids,
            |b, ids| {
                b.iter(|| {
                    black_box(generate_test_filenames(
                        black_box(&emotions),
                        &sexes,
                        ids,
                        &conditions,
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let files =
        generate_test_filenames(&TEST_EMOTIONS, &SEXES, &TEST_UTTERANCE_IDS, &TEST_CONDITIONS);

    c.bench_function("parse_test_files", |b| {
        b.iter(|| {
            for filename in &files {
                black_box(StimulusName::parse(black_box(filename)).unwrap());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_catalog_construction,
    bench_generation,
    bench_parse
);
criterion_main!(benches);
