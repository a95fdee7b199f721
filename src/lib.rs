//! Tripwise - stateless travel planning service
//!
//! The core of this library is a weighted multi-factor recommender that ranks
//! a destination catalog against traveller preferences. Around it sit
//! itinerary and cost planning, review sentiment, seasonal weather insights
//! with an optional live forecast, and an offline phrasebook.

pub mod config;
pub mod core;
pub mod error;
pub mod insights;
pub mod models;
pub mod planning;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DestinationCatalog, RecommendationResult, Recommender, StaticCatalog};
pub use error::ApiError;
pub use models::{
    BudgetRange, DestinationRecord, Recommendation, RecommendationRequest,
    RecommendationResponse, ScoringWeights, UserPreferences,
};
pub use routes::{configure_routes, AppState};
