//! Benchmarks for unidml extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic IDML story documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unidml::{ExtractOptions, StoryInput};

/// Creates one story document with the given paragraphs.
fn create_story(id: &str, paragraphs: &[(&str, f64, &str)]) -> StoryInput {
    let mut body = String::new();
    for (text, size, style) in paragraphs {
        body.push_str(&format!(
            r#"<ParagraphStyleRange><CharacterStyleRange PointSize="{}" FontStyle="{}"><Content>{}</Content></CharacterStyleRange></ParagraphStyleRange>"#,
            size, style, text
        ));
    }
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><idPkg:Story xmlns:idPkg="http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging"><Story Self="{}">{}</Story></idPkg:Story>"#,
        id, body
    );
    StoryInput::new(format!("Story_{}.xml", id), xml)
}

/// Creates a document with a category marker and `article_count` headline/body pairs.
fn create_document(article_count: usize) -> Vec<StoryInput> {
    let mut stories = vec![create_story("u100", &[("news", 12.0, "Regular")])];

    for i in 0..article_count {
        let headline = format!("Council Approves Budget For District Number {}", i);
        let byline = format!("Reporter Number, District{}", i);
        let lead = format!(
            "The council for district {} voted to approve the annual budget after a long debate.",
            i
        );
        let follow = "Residents welcomed the decision at the town hall meeting on Tuesday evening.";

        stories.push(create_story(
            &format!("u{}", 200 + i * 2),
            &[(headline.as_str(), 24.0, "Bold")],
        ));
        stories.push(create_story(
            &format!("u{}", 201 + i * 2),
            &[
                (byline.as_str(), 10.0, "Italic"),
                (lead.as_str(), 12.0, "Regular"),
                (follow, 12.0, "Regular"),
            ],
        ));
    }

    stories
}

/// Benchmark single story parsing.
fn bench_story_parsing(c: &mut Criterion) {
    let story = create_story(
        "u1",
        &[
            ("John Doe, Lagos", 10.0, "Italic"),
            ("The council voted 7-2 to approve the budget.", 12.0, "Regular"),
        ],
    );

    c.bench_function("parse_story", |b| {
        b.iter(|| unidml::parse_story(&story.filename, black_box(&story.data)).unwrap());
    });
}

/// Benchmark full extraction at various document sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for article_count in [1, 10, 50].iter() {
        let stories = create_document(*article_count);

        group.bench_function(format!("{}_articles", article_count), |b| {
            b.iter(|| unidml::extract_articles(black_box(&stories)));
        });

        let options = ExtractOptions::new().with_parallel(true);
        group.bench_function(format!("{}_articles_parallel", article_count), |b| {
            b.iter(|| unidml::extract_articles_with_options(black_box(&stories), &options));
        });
    }

    group.finish();
}

/// Benchmark JSON serialization of an extraction.
fn bench_json_output(c: &mut Criterion) {
    let extraction = unidml::extract_articles(&create_document(10));

    c.bench_function("json_pretty", |b| {
        b.iter(|| unidml::to_json(black_box(&extraction), unidml::JsonFormat::Pretty).unwrap());
    });
}

criterion_group!(
    benches,
    bench_story_parsing,
    bench_extraction,
    bench_json_output,
);
criterion_main!(benches);
