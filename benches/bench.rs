// Criterion benchmarks for Tripwise

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use chrono::NaiveDate;
use tripwise::core::{calculate_destination_score, Recommender, StaticCatalog};
use tripwise::insights::SentimentAnalyzer;
use tripwise::models::{BudgetRange, CostLevel, DestinationRecord, ScoringWeights, UserPreferences};
use tripwise::planning::{ItineraryGenerator, TripRequest};

const CLIMATES: [&str; 3] = ["temperate", "tropical", "mediterranean"];
const ACTIVITIES: [&str; 6] = ["culture", "food", "beach", "hiking", "shopping", "nightlife"];
const STYLES: [&str; 5] = ["luxury", "cultural", "adventure", "relaxation", "budget"];

fn create_destination(id: usize) -> DestinationRecord {
    let pick = |items: &[&str], offset: usize| -> Vec<String> {
        (0..3)
            .map(|k| items[(id + offset + k) % items.len()].to_string())
            .collect()
    };

    DestinationRecord {
        name: format!("Destination {}", id),
        category: if id % 2 == 0 { "city" } else { "island" }.to_string(),
        region: "Anywhere".to_string(),
        climate: CLIMATES[id % CLIMATES.len()].to_string(),
        cost_level: match id % 3 {
            0 => CostLevel::Low,
            1 => CostLevel::Medium,
            _ => CostLevel::High,
        },
        best_seasons: vec!["spring".to_string()],
        activities: pick(&ACTIVITIES, 0),
        travel_styles: pick(&STYLES, 1),
        rating: 3.5 + (id % 15) as f64 * 0.1,
        popularity: (id % 100) as f64 / 100.0,
    }
}

fn create_preferences() -> UserPreferences {
    UserPreferences {
        cost_level: Some("medium".to_string()),
        travel_style: Some("adventure".to_string()),
        climate_preference: Some("tropical".to_string()),
    }
}

fn interests() -> Vec<String> {
    vec!["beach".to_string(), "food".to_string(), "hiking".to_string()]
}

fn bench_destination_score(c: &mut Criterion) {
    let destination = create_destination(7);
    let preferences = create_preferences();
    let range = BudgetRange {
        min: 500.0,
        max: 3000.0,
    };
    let interests = interests();
    let weights = ScoringWeights::default();

    c.bench_function("destination_score", |b| {
        b.iter(|| {
            calculate_destination_score(
                black_box(&destination),
                black_box(&preferences),
                black_box(Some(&range)),
                black_box(&interests),
                black_box(&weights),
            )
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let preferences = create_preferences();
    let interests = interests();
    let history = vec!["Destination 3".to_string(), "Destination 11".to_string()];

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [5, 50, 500, 5000].iter() {
        let recommender = Recommender::new(
            Arc::new(StaticCatalog::new(
                (0..*catalog_size).map(create_destination).collect(),
            )),
            ScoringWeights::default(),
        );

        group.bench_with_input(
            BenchmarkId::new("catalog", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(&preferences),
                        black_box(None),
                        black_box(&history),
                        black_box(&interests),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_itinerary(c: &mut Criterion) {
    let generator = ItineraryGenerator::new();
    let interests = interests();
    let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap_or_default();

    c.bench_function("itinerary_14_days", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| {
            let trip = TripRequest {
                destination: "Tokyo",
                start_date: start,
                end_date: end,
                budget: 3000.0,
                travel_style: "cultural",
                interests: &interests,
                group_size: 2,
            };
            black_box(generator.generate(&trip, &mut rng))
        });
    });
}

fn bench_sentiment(c: &mut Criterion) {
    let analyzer = SentimentAnalyzer::new();
    let review = "Amazing experience overall. The hotel room was clean and comfortable, \
                  the staff gave excellent service and the food at the restaurant was superb. \
                  A bit crowded and noisy near the beach, but the location was great value.";

    c.bench_function("sentiment_review", |b| {
        b.iter(|| analyzer.analyze(black_box(review)));
    });
}

criterion_group!(
    benches,
    bench_destination_score,
    bench_recommend,
    bench_itinerary,
    bench_sentiment
);

criterion_main!(benches);
