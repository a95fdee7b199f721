// Integration tests for the Tripwise recommender

use std::sync::Arc;

use tripwise::core::{DestinationCatalog, Recommender, StaticCatalog, TOP_RECOMMENDATIONS};
use tripwise::models::{AlternativeKind, BudgetRange, ScoringWeights, UserPreferences};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn luxury_preferences() -> UserPreferences {
    UserPreferences {
        cost_level: Some("high".to_string()),
        travel_style: Some("luxury".to_string()),
        climate_preference: None,
    }
}

fn position(names: &[&str], name: &str) -> usize {
    names
        .iter()
        .position(|n| *n == name)
        .unwrap_or_else(|| panic!("{} missing from {:?}", name, names))
}

#[test]
fn test_integration_luxury_romance_ranks_above_bali() {
    let recommender = Recommender::with_builtin_catalog();
    let result = recommender.recommend(&luxury_preferences(), None, &[], &strings(&["romance"]));

    let names: Vec<&str> = result.top.iter().map(|r| r.destination.as_str()).collect();
    let bali = position(&names, "Bali");
    assert!(position(&names, "Santorini") < bali);
    assert!(position(&names, "Paris") < bali);
}

#[test]
fn test_integration_low_budget_adds_budget_friendly_set() {
    let recommender = Recommender::with_builtin_catalog();
    let range = BudgetRange {
        min: 0.0,
        max: 1500.0,
    };
    let result = recommender.recommend(&UserPreferences::default(), Some(&range), &[], &[]);

    assert!(result
        .alternatives
        .iter()
        .any(|set| set.kind == AlternativeKind::BudgetFriendly));
}

#[test]
fn test_integration_all_visited_yields_empty_top() {
    let recommender = Recommender::with_builtin_catalog();
    let history: Vec<String> = recommender
        .catalog()
        .destinations()
        .iter()
        .map(|d| d.name.clone())
        .collect();

    let result = recommender.recommend(&luxury_preferences(), None, &history, &strings(&["food"]));

    assert!(result.top.is_empty());
    assert_eq!(result.considered, 0);
}

#[test]
fn test_integration_empty_preferences_follow_popularity() {
    let recommender = Recommender::with_builtin_catalog();
    let result = recommender.recommend(&UserPreferences::default(), None, &[], &[]);

    let names: Vec<&str> = result.top.iter().map(|r| r.destination.as_str()).collect();
    assert_eq!(names, vec!["Paris", "Santorini", "Tokyo", "New York", "Bali"]);
    assert_eq!(result.top[0].score, 0.095);
}

#[test]
fn test_integration_scores_bounded_and_sorted() {
    let recommender = Recommender::with_builtin_catalog();
    let range = BudgetRange {
        min: 1000.0,
        max: 5000.0,
    };
    let prefs = UserPreferences {
        cost_level: Some("medium".to_string()),
        travel_style: Some("adventure".to_string()),
        climate_preference: Some("tropical".to_string()),
    };
    let result = recommender.recommend(
        &prefs,
        Some(&range),
        &strings(&["Tokyo"]),
        &strings(&["beach", "culture", "hiking"]),
    );

    assert!(result.top.len() <= TOP_RECOMMENDATIONS);
    assert!(result.top.iter().all(|r| r.destination != "Tokyo"));
    for rec in &result.top {
        assert!((0.0..=1.0).contains(&rec.score), "{} scored {}", rec.destination, rec.score);
    }
    for pair in result.top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_integration_recommend_is_idempotent() {
    let recommender = Recommender::with_builtin_catalog();
    let prefs = luxury_preferences();
    let interests = strings(&["culture", "food"]);

    let first = recommender.recommend(&prefs, None, &[], &interests);
    let second = recommender.recommend(&prefs, None, &[], &interests);

    let summarize = |r: &tripwise::RecommendationResult| -> Vec<(String, f64, String)> {
        r.top
            .iter()
            .map(|t| (t.destination.clone(), t.score, t.reasoning.clone()))
            .collect()
    };
    assert_eq!(summarize(&first), summarize(&second));
}

#[test]
fn test_integration_custom_catalog_and_weights() {
    let mut catalog = StaticCatalog::builtin().destinations().to_vec();
    catalog.retain(|d| d.region == "Asia");
    let weights = ScoringWeights {
        cost_level: 0.0,
        activities: 0.5,
        travel_style: 0.0,
        climate: 0.0,
        popularity: 0.5,
    };
    let recommender = Recommender::new(Arc::new(StaticCatalog::new(catalog)), weights);

    let result = recommender.recommend(&UserPreferences::default(), None, &[], &strings(&["beach"]));

    let names: Vec<&str> = result.top.iter().map(|r| r.destination.as_str()).collect();
    assert_eq!(names, vec!["Bali", "Tokyo"]);
    // 1.0 * 0.5 + 0.88 * 0.5
    assert_eq!(result.top[0].score, 0.94);
}

#[test]
fn test_integration_uppercase_cost_label_counts_as_medium() {
    let recommender = Recommender::with_builtin_catalog();
    let prefs = UserPreferences {
        cost_level: Some("HIGH".to_string()),
        ..Default::default()
    };
    let range = BudgetRange {
        min: 0.0,
        max: 5000.0,
    };
    let result = recommender.recommend(&prefs, Some(&range), &[], &[]);

    // Bali is the only medium destination: 1.0 * 0.25 + 0.088
    assert_eq!(result.top[0].destination, "Bali");
    assert_eq!(result.top[0].score, 0.338);

    let paris = result
        .top
        .iter()
        .find(|r| r.destination == "Paris")
        .unwrap();
    // 0.7 * 0.25 + 0.095
    assert_eq!(paris.score, 0.27);
    assert_eq!(paris.reasoning, "Highly rated by travelers");
}
