// Criterion benchmarks for pada-kn.
//
// Everything runs over the built-in rule tables, so no dictionary files
// are required.
//
// Run:
//   cargo bench -p pada-kn

use criterion::{Criterion, criterion_group, criterion_main};
use pada_kn::{DEFAULT_ENDING, PadaHandle};

/// Join every built-in example pair through the full tier chain.
fn bench_join_example_pairs(c: &mut Criterion) {
    let handle = PadaHandle::new();
    let pairs: Vec<(String, String)> = handle
        .rules()
        .sandhi_rules()
        .iter()
        .map(|r| (r.example_word1.clone(), r.example_word2.clone()))
        .collect();

    c.bench_function("join_example_pairs", |b| {
        b.iter(|| {
            for (w1, w2) in &pairs {
                std::hint::black_box(handle.apply_sandhi(w1, w2));
            }
        });
    });
}

/// Generate split candidates for every built-in whole-join literal.
fn bench_reverse_sandhi(c: &mut Criterion) {
    let handle = PadaHandle::new();
    let combined: Vec<String> = handle
        .rules()
        .sandhi_rules()
        .iter()
        .filter(|r| !r.combined_result.is_empty())
        .map(|r| r.combined_result.clone())
        .collect();

    c.bench_function("reverse_sandhi_literals", |b| {
        b.iter(|| {
            for word in &combined {
                std::hint::black_box(handle.reverse_sandhi(word));
            }
        });
    });
}

/// Detect the case marker of a set of inflected words, covering the
/// known-output, suffix-table and fuzzy-tail tiers.
fn bench_detect_vibhakti(c: &mut Criterion) {
    let handle = PadaHandle::new();
    let words = ["ಮನೆಯಲ್ಲಿ", "ಹೂವನ್ನು", "ಶಕ್ತಿಯನ್ನು", "ಮರಯಿಂದ", "ಮರಯಿನದ", "ರಾಮನಿಗೆ"];

    c.bench_function("detect_vibhakti", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.detect_vibhakti(word));
            }
        });
    });
}

/// Inflect Latin and Kannada stems through the single-argument resolver.
fn bench_apply_vibhakti_single(c: &mut Criterion) {
    let handle = PadaHandle::new();
    let words = ["ರಾಮ", "ರವಿ", "raama", "ಮನೆ"];

    c.bench_function("apply_vibhakti_single", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.apply_vibhakti_single(word, DEFAULT_ENDING));
            }
        });
    });
}

/// Resolve compounds through the full tier cascade.
fn bench_validate_compound(c: &mut Criterion) {
    let handle = PadaHandle::new();
    let words = ["ಮಹಾತ್ಮ", "ಮನೆಯಂಗಳ", "ಸಂಗೀತ", "ಗುರುವನು", "ಕಟ"];

    c.bench_function("validate_compound", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.validate_compound(word));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_join_example_pairs,
    bench_reverse_sandhi,
    bench_detect_vibhakti,
    bench_apply_vibhakti_single,
    bench_validate_compound,
);
criterion_main!(benches);
