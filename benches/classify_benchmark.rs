use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emotion_sniffer::{build_report, classify_text_emotion, EmotionScores, Lexicon, TextRecord};

fn benchmark_lexicon() -> Lexicon {
    vec![
        ("happy".to_string(), EmotionScores::new([0, 3, 0, 0, 0, 1])),
        ("scared".to_string(), EmotionScores::new([0, 0, 3, 0, 0, 0])),
        ("hate".to_string(), EmotionScores::new([3, 0, 0, -1, 1, 0])),
        ("trust".to_string(), EmotionScores::new([0, 0, 0, 3, 0, 0])),
        ("sad".to_string(), EmotionScores::new([0, 0, 0, 0, 3, 0])),
        ("soon".to_string(), EmotionScores::new([0, 0, 0, 0, 0, 2])),
    ]
    .into_iter()
    .collect()
}

fn benchmark_classify(c: &mut Criterion) {
    let lexicon = benchmark_lexicon();
    let text = "I was happy, then scared, and now I just hate waiting. Coming soon? Sad!";

    c.bench_function("classify_text_emotion", |b| {
        b.iter(|| classify_text_emotion(black_box(text), black_box(&lexicon)))
    });
}

fn benchmark_report(c: &mut Criterion) {
    let lexicon = benchmark_lexicon();
    let records: Vec<TextRecord> = (0..1_000)
        .map(|id| TextRecord {
            id,
            author: format!("user{}", id),
            category: "canada".to_string(),
            body: ["so happy", "I hate this", "trust me", "coming soon", "meh"][id as usize % 5]
                .to_string(),
        })
        .collect();

    c.bench_function("build_report_1000_records", |b| {
        b.iter(|| {
            let mut sink: Vec<u8> = Vec::new();
            build_report(black_box(&records), black_box(&lexicon), &mut sink)
        })
    });
}

criterion_group!(benches, benchmark_classify, benchmark_report);
criterion_main!(benches);
