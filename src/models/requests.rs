use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{BudgetRange, UserPreferences};

/// Request for destination recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: UserPreferences,
    #[serde(default, alias = "budget_range", rename = "budgetRange")]
    #[validate(custom(function = "validate_budget_range"))]
    pub budget_range: Option<BudgetRange>,
    #[serde(
        default,
        alias = "travel_history",
        rename = "travelHistory",
        deserialize_with = "null_as_default"
    )]
    pub travel_history: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_budget_range(range: &BudgetRange) -> Result<(), ValidationError> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ValidationError::new("budget_not_finite"));
    }
    if range.min < 0.0 || range.max < range.min {
        let mut error = ValidationError::new("budget_range");
        error.message = Some("budgetRange requires 0 <= min <= max".into());
        return Err(error);
    }
    Ok(())
}

/// Request to generate a day-by-day itinerary
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "budget must not be negative"))]
    pub budget: f64,
    #[serde(default = "default_travel_style", alias = "travel_style")]
    pub travel_style: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_group_size", alias = "group_size")]
    #[validate(range(min = 1, max = 50, message = "groupSize must be between 1 and 50"))]
    pub group_size: u32,
}

/// Request for standalone travel tips
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TravelTipsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[serde(default)]
    pub travel_style: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
}

/// Request for a trip cost prediction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CostPredictionRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 365, message = "duration must be between 1 and 365 days"))]
    pub duration: u32,
    #[serde(default = "default_travel_style")]
    pub travel_style: String,
    #[serde(default = "default_group_size")]
    #[validate(range(min = 1, max = 50, message = "groupSize must be between 1 and 50"))]
    pub group_size: u32,
    #[serde(default)]
    pub season: Option<String>,
}

/// Request to split a total budget across spending categories
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOptimizationRequest {
    #[serde(default)]
    #[validate(range(min = 0.01, message = "totalBudget must be positive"))]
    pub total_budget: f64,
    #[serde(default)]
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 365, message = "duration must be between 1 and 365 days"))]
    pub duration: u32,
    #[serde(default)]
    pub preferences: BudgetPreferences,
}

/// Spending focus flags for budget optimization
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BudgetPreferences {
    #[serde(default)]
    pub food_focused: bool,
    #[serde(default)]
    pub activity_focused: bool,
    #[serde(default)]
    pub luxury_accommodation: bool,
}

/// Request to score a single piece of text
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SentimentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

/// Request to score a batch of reviews
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one review is required"))]
    pub reviews: Vec<String>,
}

/// Inclusive travel window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Request for weather insights over a travel window
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeatherInsightsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[serde(alias = "travel_dates")]
    pub travel_dates: TravelDates,
}

/// Request for a live forecast from the upstream weather service
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForecastRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 16, message = "days must be between 1 and 16"))]
    pub days: Option<u8>,
}

/// Request to translate a phrase
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    #[serde(default, alias = "target_language")]
    #[validate(length(min = 1, message = "targetLanguage is required"))]
    pub target_language: String,
    #[serde(default = "default_source_language", alias = "source_language")]
    pub source_language: String,
}

/// Request to guess the language of a phrase
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DetectLanguageRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

/// Request carrying only a destination name
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DestinationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
}

fn default_travel_style() -> String {
    "balanced".to_string()
}

fn default_group_size() -> u32 {
    1
}

fn default_experience_level() -> String {
    "intermediate".to_string()
}

fn default_source_language() -> String {
    "auto".to_string()
}
