// Criterion benchmarks for Roomscout

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roomscout::core::{build_user_message, extract_recommendation, prepare_speech_text};
use roomscout::models::fallback_listings;
use serde_json::json;

fn model_reply(matches: usize) -> String {
    let listings: Vec<_> = fallback_listings().into_iter().cycle().take(matches).collect();
    let document = json!({
        "matches": listings,
        "recommendation": {
            "title": "215 River St",
            "images": ["assets/house1.jpg"],
            "Cost": "$1850",
            "Room": "1 bedroom Apartment",
            "Lease": "12 months",
            "ownerPhone": "15551112233"
        }
    });
    format!(
        "Here is my recommendation:\n{}\n\n215 River St is three blocks from Stevens and includes utilities.",
        document
    )
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_recommendation");

    for matches in [1usize, 8, 64] {
        let reply = model_reply(matches);
        group.bench_with_input(BenchmarkId::new("brace_span", matches), &reply, |b, reply| {
            b.iter(|| extract_recommendation(black_box(reply)))
        });
    }

    let fenced = format!("```\n{}\n```\nFenced reply.", json!(["h001", "h002", "h005"]));
    group.bench_function("any_fence", |b| {
        b.iter(|| extract_recommendation(black_box(&fenced)))
    });

    group.finish();
}

fn bench_prompt(c: &mut Criterion) {
    let listings = fallback_listings();

    c.bench_function("build_user_message", |b| {
        b.iter(|| build_user_message(black_box("furnished one bedroom near the PATH"), black_box(&listings)))
    });

    let explanation = "Close to campus with utilities included.\n".repeat(200);
    c.bench_function("prepare_speech_text", |b| {
        b.iter(|| prepare_speech_text(black_box(&explanation), 5000))
    });
}

criterion_group!(benches, bench_extraction, bench_prompt);
criterion_main!(benches);
