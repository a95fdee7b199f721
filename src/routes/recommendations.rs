use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{RecommendationRequest, RecommendationResponse};
use crate::routes::{success, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/get-recommendations", web::post().to(get_recommendations));
}

/// Recommendations endpoint
///
/// POST /get-recommendations
///
/// Request body:
/// ```json
/// {
///   "preferences": {"cost_level": "medium", "travel_style": "cultural"},
///   "budgetRange": {"min": 500, "max": 1500},
///   "travelHistory": ["Paris"],
///   "interests": ["food"]
/// }
/// ```
async fn get_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let req = req.into_inner();

    let result = state.recommender.recommend(
        &req.preferences,
        req.budget_range.as_ref(),
        &req.travel_history,
        &req.interests,
    );

    tracing::info!(
        considered = result.considered,
        returned = result.top.len(),
        alternatives = result.alternatives.len(),
        "Generated recommendations"
    );

    success(
        "recommendations",
        &RecommendationResponse {
            top_recommendations: result.top,
            alternative_recommendations: result.alternatives,
            user_preferences: req.preferences,
            budget_range: req.budget_range,
            interests: req.interests,
            travel_history: req.travel_history,
        },
    )
}
