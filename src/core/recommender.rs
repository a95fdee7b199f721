use std::sync::Arc;

use crate::core::{
    alternatives::build_alternatives,
    catalog::{DestinationCatalog, StaticCatalog},
    reasoning::build_reasoning,
    scoring::calculate_destination_score,
};
use crate::models::{
    AlternativeSet, BudgetRange, Recommendation, ScoredDestination, ScoringWeights,
    UserPreferences,
};

/// Number of primary recommendations returned
pub const TOP_RECOMMENDATIONS: usize = 5;

/// Result of the recommendation process
#[derive(Debug)]
pub struct RecommendationResult {
    pub top: Vec<Recommendation>,
    pub alternatives: Vec<AlternativeSet>,
    /// Catalog entries left after excluding visited destinations
    pub considered: usize,
}

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Exclude destinations from the travel history
/// 2. Score each remaining destination
/// 3. Rank (stable, so ties keep catalog order) and keep the top five
/// 4. Attach reasoning and the rule-triggered alternative sets
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<dyn DestinationCatalog>,
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(catalog: Arc<dyn DestinationCatalog>, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(Arc::new(StaticCatalog::builtin()), ScoringWeights::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn catalog(&self) -> &dyn DestinationCatalog {
        self.catalog.as_ref()
    }

    /// Score and rank every unvisited destination, best first
    pub fn rank(
        &self,
        preferences: &UserPreferences,
        budget_range: Option<&BudgetRange>,
        travel_history: &[String],
        interests: &[String],
    ) -> Vec<ScoredDestination<'_>> {
        let mut scored: Vec<ScoredDestination<'_>> = self
            .catalog
            .destinations()
            .iter()
            .filter(|record| !travel_history.contains(&record.name))
            .map(|record| ScoredDestination {
                record,
                score: calculate_destination_score(
                    record,
                    preferences,
                    budget_range,
                    interests,
                    &self.weights,
                ),
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }

    /// Produce the top recommendations and alternative sets for a caller
    pub fn recommend(
        &self,
        preferences: &UserPreferences,
        budget_range: Option<&BudgetRange>,
        travel_history: &[String],
        interests: &[String],
    ) -> RecommendationResult {
        let ranked = self.rank(preferences, budget_range, travel_history, interests);
        let considered = ranked.len();

        let top = ranked
            .into_iter()
            .take(TOP_RECOMMENDATIONS)
            .map(|scored| {
                let record = scored.record;
                Recommendation {
                    destination: record.name.clone(),
                    score: round3(scored.score),
                    category: record.category.clone(),
                    region: record.region.clone(),
                    cost_level: record.cost_level,
                    best_seasons: record.best_seasons.clone(),
                    activities: record.activities.clone(),
                    travel_styles: record.travel_styles.clone(),
                    rating: record.rating,
                    popularity: record.popularity,
                    reasoning: build_reasoning(record, preferences, interests),
                }
            })
            .collect();

        let alternatives = build_alternatives(preferences, budget_range, interests);

        RecommendationResult {
            top,
            alternatives,
            considered,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("destinations", &self.catalog.len())
            .field("weights", &self.weights)
            .finish()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
