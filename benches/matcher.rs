// benches/matcher.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use greenmen_bot::knowledge::{CaseMode, Matcher};

fn sample_questions(n: usize) -> Vec<String> {
    let stems = [
        "What time does school start",
        "When is the next board meeting",
        "Where is the athletics office",
        "How do I report an absence",
        "Who is the principal of the middle school",
        "When does spring break begin",
    ];
    (0..n).map(|i| format!("{} ({i})?", stems[i % stems.len()])).collect()
}

fn bench_matcher(c: &mut Criterion) {
    let insensitive = Matcher::new(0.7, CaseMode::Insensitive);
    let sensitive = Matcher::new(0.7, CaseMode::Sensitive);

    for n in [10, 200] {
        let questions = sample_questions(n);
        c.bench_function(&format!("best_match_insensitive_{n}"), |b| {
            b.iter(|| insensitive.best_match(black_box("wat time dose skool start"), black_box(&questions)))
        });
        c.bench_function(&format!("best_match_sensitive_{n}"), |b| {
            b.iter(|| sensitive.best_match(black_box("wat time dose skool start"), black_box(&questions)))
        });
    }
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
