use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{
    BudgetOptimizationRequest, CostPredictionRequest, ItineraryRequest, TravelTipsRequest,
};
use crate::planning::{travel_tips, AllocationPreferences, TripRequest};
use crate::routes::{success, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate-itinerary", web::post().to(generate_itinerary))
        .route("/generate-travel-tips", web::post().to(generate_travel_tips))
        .route("/predict-costs", web::post().to(predict_costs))
        .route("/optimize-budget", web::post().to(optimize_budget));
}

/// POST /generate-itinerary
async fn generate_itinerary(
    state: web::Data<AppState>,
    req: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let trip = TripRequest {
        destination: &req.destination,
        start_date: req.start_date,
        end_date: req.end_date,
        budget: req.budget,
        travel_style: &req.travel_style,
        interests: &req.interests,
        group_size: req.group_size,
    };

    let mut rng = state.request_rng();
    let itinerary = state.itineraries.generate(&trip, &mut rng)?;

    tracing::info!(
        destination = %itinerary.destination,
        days = itinerary.duration,
        "Generated itinerary {}",
        itinerary.id
    );

    success("itinerary", &itinerary)
}

/// POST /generate-travel-tips
async fn generate_travel_tips(req: web::Json<TravelTipsRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let tips = travel_tips(
        &req.destination,
        req.travel_style.as_deref(),
        &req.experience_level,
    );

    success("travelTips", &tips)
}

/// POST /predict-costs
async fn predict_costs(
    state: web::Data<AppState>,
    req: web::Json<CostPredictionRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let prediction = state.costs.predict(
        &req.destination,
        req.duration,
        &req.travel_style,
        req.group_size,
        req.season.as_deref(),
    );

    tracing::debug!(
        destination = %req.destination,
        total = prediction.total_cost,
        "Predicted trip cost"
    );

    success("costPrediction", &prediction)
}

/// POST /optimize-budget
async fn optimize_budget(
    state: web::Data<AppState>,
    req: web::Json<BudgetOptimizationRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let preferences = AllocationPreferences {
        food_focused: req.preferences.food_focused,
        activity_focused: req.preferences.activity_focused,
        luxury_accommodation: req.preferences.luxury_accommodation,
    };

    let plan = state.costs.optimize_budget(
        req.total_budget,
        &req.destination,
        req.duration,
        preferences,
    );

    success("budgetOptimization", &plan)
}
