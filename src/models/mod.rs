// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AlternativeKind, AlternativeSet, BudgetRange, CostLevel, DestinationRecord, Recommendation,
    ScoredDestination, ScoringWeights, UserPreferences,
};
pub use requests::{
    BudgetOptimizationRequest, BudgetPreferences, CostPredictionRequest, DestinationRequest,
    DetectLanguageRequest, ForecastRequest, ItineraryRequest, RecommendationRequest,
    ReviewsRequest, SentimentRequest, TranslateRequest, TravelDates, TravelTipsRequest,
    WeatherInsightsRequest,
};
pub use responses::{ErrorResponse, HealthResponse, RecommendationResponse};
