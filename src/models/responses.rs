use serde::{Deserialize, Serialize};

use crate::models::domain::{AlternativeSet, BudgetRange, Recommendation, UserPreferences};

/// Payload of the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub top_recommendations: Vec<Recommendation>,
    pub alternative_recommendations: Vec<AlternativeSet>,
    pub user_preferences: UserPreferences,
    pub budget_range: Option<BudgetRange>,
    pub interests: Vec<String>,
    pub travel_history: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(
        rename = "supportedLanguages",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_languages: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            supported_languages: None,
        }
    }
}
