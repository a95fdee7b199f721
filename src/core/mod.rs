// Recommendation engine exports
pub mod alternatives;
pub mod catalog;
pub mod reasoning;
pub mod recommender;
pub mod scoring;

pub use alternatives::{build_alternatives, BUDGET_FRIENDLY_MAX};
pub use catalog::{DestinationCatalog, StaticCatalog};
pub use reasoning::build_reasoning;
pub use recommender::{RecommendationResult, Recommender, TOP_RECOMMENDATIONS};
pub use scoring::{
    activity_match, calculate_destination_score, climate_match, cost_match, popularity_score,
    style_match,
};
