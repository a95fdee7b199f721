use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use crate::error::ApiError;
use crate::insights::WeatherInsights;
use crate::models::{
    DestinationRequest, DetectLanguageRequest, ForecastRequest, ReviewsRequest, SentimentRequest,
    TranslateRequest, WeatherInsightsRequest,
};
use crate::routes::{success, AppState};
use crate::services::LiveForecast;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analyze-sentiment", web::post().to(analyze_sentiment))
        .route("/analyze-reviews", web::post().to(analyze_reviews))
        .route("/get-weather-insights", web::post().to(weather_insights))
        .route("/weather-forecast", web::post().to(weather_forecast))
        .route("/translate", web::post().to(translate))
        .route("/detect-language", web::post().to(detect_language))
        .route("/destination-languages", web::post().to(destination_languages))
        .route("/essential-phrases", web::post().to(essential_phrases));
}

/// Weather insights, optionally extended with live upstream data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsPayload {
    #[serde(flatten)]
    insights: WeatherInsights,
    #[serde(skip_serializing_if = "Option::is_none")]
    live_forecast: Option<LiveSection>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LiveSection {
    Available(LiveForecast),
    Unavailable { error: String },
}

/// POST /analyze-sentiment
async fn analyze_sentiment(
    state: web::Data<AppState>,
    req: web::Json<SentimentRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    success("sentiment", &state.sentiment.analyze(&req.text))
}

/// POST /analyze-reviews
async fn analyze_reviews(
    state: web::Data<AppState>,
    req: web::Json<ReviewsRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let analysis = state.sentiment.analyze_many(&req.reviews)?;

    tracing::debug!(
        reviews = analysis.total_reviews,
        overall = analysis.overall_sentiment.as_str(),
        "Analyzed reviews"
    );

    success("reviewAnalysis", &analysis)
}

/// POST /get-weather-insights
///
/// With live forecasts enabled, an upstream failure degrades to
/// `liveForecast: {"error": ...}` instead of failing the request.
async fn weather_insights(
    state: web::Data<AppState>,
    req: web::Json<WeatherInsightsRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let insights = {
        let mut rng = state.request_rng();
        state.weather.insights(
            &req.destination,
            req.travel_dates.start,
            req.travel_dates.end,
            &mut rng,
        )?
    };

    let live_forecast = if state.live_forecast {
        match state
            .forecast
            .forecast_for(&req.destination, state.forecast_days)
            .await
        {
            Ok(forecast) => Some(LiveSection::Available(forecast)),
            Err(e) => {
                tracing::warn!("Live forecast unavailable for {}: {}", req.destination, e);
                Some(LiveSection::Unavailable {
                    error: e.to_string(),
                })
            }
        }
    } else {
        None
    };

    success(
        "weatherInsights",
        &InsightsPayload {
            insights,
            live_forecast,
        },
    )
}

/// POST /weather-forecast
async fn weather_forecast(
    state: web::Data<AppState>,
    req: web::Json<ForecastRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let days = req.days.unwrap_or(state.forecast_days);
    let forecast = state.forecast.forecast_for(&req.destination, days).await?;

    success("forecast", &forecast)
}

/// POST /translate
async fn translate(
    state: web::Data<AppState>,
    req: web::Json<TranslateRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let translation =
        state
            .phrasebook
            .translate(&req.text, &req.target_language, &req.source_language)?;
    success("translation", &translation)
}

/// POST /detect-language
async fn detect_language(
    state: web::Data<AppState>,
    req: web::Json<DetectLanguageRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    success("detection", &state.phrasebook.detect_language(&req.text))
}

/// POST /destination-languages
async fn destination_languages(
    state: web::Data<AppState>,
    req: web::Json<DestinationRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    success(
        "languages",
        &state.phrasebook.languages_for_destination(&req.destination),
    )
}

/// POST /essential-phrases
async fn essential_phrases(
    state: web::Data<AppState>,
    req: web::Json<DestinationRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    success(
        "phrases",
        &state.phrasebook.essential_phrases(&req.destination),
    )
}
