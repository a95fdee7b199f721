use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use validator::ValidationErrors;

use crate::insights::{Language, SentimentError, TranslationError, WeatherError};
use crate::models::ErrorResponse;
use crate::planning::ItineraryError;
use crate::services::ForecastError;

/// Errors surfaced at the HTTP boundary
///
/// Every variant renders as `{"error": "..."}` with a non-2xx status.
/// Internal failures carry only a fixed public message; the underlying cause
/// is logged where the error is created.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported target language: {language}")]
    UnsupportedLanguage {
        language: String,
        supported: Vec<String>,
    },

    #[error("{0}")]
    Upstream(#[from] ForecastError),

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Log `cause` and hide it behind `public_message`
    pub fn internal(public_message: &'static str, cause: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", public_message, cause);
        ApiError::Internal(public_message)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        tracing::info!("Validation failed: {}", errors);
        ApiError::Validation(format!("Validation failed: {}", errors))
    }
}

impl From<ItineraryError> for ApiError {
    fn from(err: ItineraryError) -> Self {
        match err {
            ItineraryError::DateOverflow => ApiError::internal("Failed to generate itinerary", err),
            _ => ApiError::validation(err.to_string()),
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<SentimentError> for ApiError {
    fn from(err: SentimentError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::UnsupportedLanguage(language) => ApiError::UnsupportedLanguage {
                language,
                supported: Language::supported(),
            },
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::UnsupportedLanguage { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::UnsupportedLanguage { supported, .. } => ErrorResponse {
                error: self.to_string(),
                supported_languages: Some(supported.clone()),
            },
            _ => ErrorResponse::new(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::Validation(format!("Invalid JSON: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::validation("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Upstream(ForecastError::LocationNotFound("Atlantis".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Internal("Failed").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_errors_map_to_bad_request() {
        let err: ApiError = ItineraryError::EndBeforeStart.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "endDate must not be before startDate");

        let err: ApiError = ItineraryError::DateOverflow.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: ApiError = TranslationError::UnsupportedLanguage("klingon".into()).into();
        assert!(matches!(err, ApiError::UnsupportedLanguage { ref supported, .. } if supported.len() == 15));
    }

    #[actix_web::test]
    async fn test_internal_error_hides_cause() {
        let err = ApiError::internal("Failed to generate itinerary", "date overflow");
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Failed to generate itinerary");
        assert!(!body.windows(8).any(|w| w == b"overflow"));
    }

    #[actix_web::test]
    async fn test_unsupported_language_lists_supported() {
        let err = ApiError::UnsupportedLanguage {
            language: "klingon".into(),
            supported: vec!["english".into(), "spanish".into()],
        };
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Unsupported target language: klingon");
        assert_eq!(json["supportedLanguages"][1], "spanish");
    }
}
