use book_search_service::models::provider::VolumesResponse;
use book_search_service::services::books::normalize;
use book_search_service::services::query::SearchCriteria;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

fn sample_payload(item_count: usize) -> Value {
    let items: Vec<Value> = (0..item_count)
        .map(|i| {
            json!({
                "id": format!("volume-{}", i),
                "volumeInfo": {
                    "title": format!("Test Book {}", i),
                    "authors": [format!("Test Author {}", i % 7)],
                    "categories": ["Fiction"],
                    "description": "A test volume used for benchmarking",
                    "imageLinks": {
                        "thumbnail": format!("http://example.com/{}.jpg", i)
                    }
                }
            })
        })
        .collect();

    json!({ "totalItems": item_count, "items": items })
}

fn benchmark_compose_query(c: &mut Criterion) {
    let criteria = SearchCriteria::new(
        Some("desert planet".to_string()),
        Some("dune".to_string()),
        Some("frank herbert".to_string()),
    );

    c.bench_function("compose_query", |b| {
        b.iter(|| black_box(&criteria).to_query_string())
    });
}

fn benchmark_normalize_full_page(c: &mut Criterion) {
    let raw = sample_payload(40);

    c.bench_function("normalize_full_page", |b| {
        b.iter(|| {
            let payload: VolumesResponse = serde_json::from_value(black_box(raw.clone())).unwrap();
            normalize(payload).unwrap()
        })
    });
}

fn benchmark_normalize_sparse_items(c: &mut Criterion) {
    let items: Vec<Value> = (0..40).map(|i| json!({ "id": format!("v{}", i) })).collect();
    let raw = json!({ "totalItems": 40, "items": items });

    c.bench_function("normalize_sparse_items", |b| {
        b.iter(|| {
            let payload: VolumesResponse = serde_json::from_value(black_box(raw.clone())).unwrap();
            normalize(payload).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_compose_query,
    benchmark_normalize_full_page,
    benchmark_normalize_sparse_items
);
criterion_main!(benches);
