// HTTP API tests for Tripwise

use std::sync::Arc;
use std::time::Duration;

use actix_web::{http::StatusCode, test, web, App};
use mockito::{Matcher, Server};
use serde_json::{json, Value};

use tripwise::error::handle_json_payload_error;
use tripwise::services::OpenMeteoClient;
use tripwise::{configure_routes, AppState, Recommender};

fn forecast_client(base_url: &str) -> Arc<OpenMeteoClient> {
    Arc::new(
        OpenMeteoClient::new(
            format!("{}/v1/search", base_url),
            format!("{}/v1/forecast", base_url),
            Duration::from_secs(2),
            10,
            Duration::from_secs(60),
        )
        .unwrap(),
    )
}

fn state(base_url: &str) -> AppState {
    AppState::new(Recommender::default(), forecast_client(base_url)).with_seed(Some(7))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

async fn mock_paris_forecast(server: &mut Server) {
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"results": [{"name": "Paris", "latitude": 48.85, "longitude": 2.35,
                "timezone": "Europe/Paris", "country": "France"}]}"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"daily": {"time": ["2025-06-01"], "weather_code": [0],
                "temperature_2m_max": [24.0], "temperature_2m_min": [14.0]}}"#,
        )
        .create_async()
        .await;
}

#[actix_web::test]
async fn test_health() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "tripwise");
}

#[actix_web::test]
async fn test_recommendations_envelope() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/get-recommendations")
        .set_json(json!({
            "preferences": {"cost_level": "high", "travel_style": "luxury"},
            "budgetRange": {"min": 500, "max": 1500},
            "travelHistory": ["Paris"],
            "interests": ["culture"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let recommendations = &body["recommendations"];
    let top = recommendations["topRecommendations"].as_array().unwrap();
    assert_eq!(top.len(), 4);
    assert!(top.iter().all(|r| r["destination"] != "Paris"));

    let kinds: Vec<&str> = recommendations["alternativeRecommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|set| set["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["budget_friendly", "cultural"]);
    assert_eq!(recommendations["travelHistory"], json!(["Paris"]));
}

#[actix_web::test]
async fn test_recommendations_budget_max_only() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/get-recommendations")
        .set_json(json!({"budgetRange": {"max": 1500}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let sets = body["recommendations"]["alternativeRecommendations"]
        .as_array()
        .unwrap();
    assert!(sets.iter().any(|set| set["type"] == "budget_friendly"));
}

#[actix_web::test]
async fn test_recommendations_accept_null_lists() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/get-recommendations")
        .set_json(json!({"preferences": {}, "travelHistory": null, "interests": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let top = body["recommendations"]["topRecommendations"].as_array().unwrap();
    assert_eq!(top.len(), 5);
    assert_eq!(top[0]["destination"], "Paris");
}

#[actix_web::test]
async fn test_recommendations_rejects_inverted_budget() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/get-recommendations")
        .set_json(json!({"budgetRange": {"min": 2000, "max": 100}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("budgetRange"));
}

#[actix_web::test]
async fn test_invalid_json_is_bad_request() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/analyze-sentiment")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[actix_web::test]
async fn test_itinerary_is_reproducible_with_seed() {
    let app = app!(state("http://127.0.0.1:9"));
    let payload = json!({
        "destination": "Tokyo",
        "startDate": "2025-04-01",
        "endDate": "2025-04-03",
        "budget": 1500,
        "travelStyle": "budget"
    });

    let mut days = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/generate-itinerary")
            .set_json(&payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["itinerary"]["title"], "Tokyo Adventure");
        assert_eq!(body["itinerary"]["days"].as_array().unwrap().len(), 3);
        days.push(body["itinerary"]["days"].clone());
    }
    assert_eq!(days[0], days[1]);
}

#[actix_web::test]
async fn test_itinerary_end_before_start() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/generate-itinerary")
        .set_json(json!({
            "destination": "Paris",
            "startDate": "2025-04-05",
            "endDate": "2025-04-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cost_and_budget_routes() {
    let app = app!(state("http://127.0.0.1:9"));

    let req = test::TestRequest::post()
        .uri("/predict-costs")
        .set_json(json!({"destination": "Paris", "duration": 3, "travelStyle": "budget",
                         "groupSize": 2, "season": "summer"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["costPrediction"]["totalCost"], 1244.1);

    let req = test::TestRequest::post()
        .uri("/optimize-budget")
        .set_json(json!({"totalBudget": 1000, "destination": "Rome", "duration": 5}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let plan = &body["budgetOptimization"];
    assert_eq!(plan["dailyBudget"], 200.0);
    assert_eq!(plan["categoryAllocation"]["accommodation"], 80.0);
}

#[actix_web::test]
async fn test_reviews_require_at_least_one() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/analyze-reviews")
        .set_json(json!({"reviews": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_translate_unsupported_language() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/translate")
        .set_json(json!({"text": "hello", "targetLanguage": "klingon"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unsupported target language: klingon");
    assert_eq!(body["supportedLanguages"].as_array().unwrap().len(), 15);
}

#[actix_web::test]
async fn test_translate_known_phrase() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/translate")
        .set_json(json!({"text": "thank you", "targetLanguage": "es"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["translation"]["translatedText"], "Gracias");
    assert_eq!(body["translation"]["pronunciation"], "GRAH-see-ahs");
}

#[actix_web::test]
async fn test_weather_forecast_route() {
    let mut server = Server::new_async().await;
    mock_paris_forecast(&mut server).await;

    let app = app!(state(&server.url()));
    let req = test::TestRequest::post()
        .uri("/weather-forecast")
        .set_json(json!({"destination": "Paris", "days": 1}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["forecast"]["location"]["country"], "France");
    assert_eq!(body["forecast"]["days"][0]["description"], "Clear sky");
}

#[actix_web::test]
async fn test_weather_forecast_upstream_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let app = app!(state(&server.url()));
    let req = test::TestRequest::post()
        .uri("/weather-forecast")
        .set_json(json!({"destination": "Paris"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_weather_insights_live_section() {
    let mut server = Server::new_async().await;
    mock_paris_forecast(&mut server).await;

    let app = app!(state(&server.url()).with_live_forecast(true, 1));
    let req = test::TestRequest::post()
        .uri("/get-weather-insights")
        .set_json(json!({
            "destination": "Paris",
            "travelDates": {"start": "2025-06-01", "end": "2025-06-03"}
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let insights = &body["weatherInsights"];
    assert_eq!(insights["season"], "summer");
    assert_eq!(insights["weatherForecast"].as_array().unwrap().len(), 3);
    assert_eq!(insights["liveForecast"]["days"][0]["temperatureMax"], 24.0);
}

#[actix_web::test]
async fn test_weather_insights_degrade_without_upstream() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let app = app!(state(&server.url()).with_live_forecast(true, 3));
    let req = test::TestRequest::post()
        .uri("/get-weather-insights")
        .set_json(json!({
            "destination": "Paris",
            "travelDates": {"start": "2025-06-01", "end": "2025-06-02"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let live = &body["weatherInsights"]["liveForecast"];
    assert!(live["error"].as_str().unwrap().contains("500"));
}

#[actix_web::test]
async fn test_weather_insights_without_live_forecast() {
    let app = app!(state("http://127.0.0.1:9"));
    let req = test::TestRequest::post()
        .uri("/get-weather-insights")
        .set_json(json!({
            "destination": "Bali",
            "travelDates": {"start": "2025-01-10", "end": "2025-01-12"}
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["weatherInsights"].get("liveForecast").is_none());
}

#[actix_web::test]
async fn test_language_routes() {
    let app = app!(state("http://127.0.0.1:9"));

    let req = test::TestRequest::post()
        .uri("/detect-language")
        .set_json(json!({"text": "Bonjour, merci beaucoup"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["detection"]["detectedLanguage"], "french");

    let req = test::TestRequest::post()
        .uri("/destination-languages")
        .set_json(json!({"destination": "Switzerland"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["languages"]["primaryLanguage"]["code"], "de");

    let req = test::TestRequest::post()
        .uri("/essential-phrases")
        .set_json(json!({"destination": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
