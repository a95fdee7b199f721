use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use crate::config::Settings;
use crate::core::{Recommender, StaticCatalog};
use crate::insights::{Phrasebook, SentimentAnalyzer, WeatherAnalyzer};
use crate::planning::{CostPredictor, ItineraryGenerator};
use crate::services::{ForecastError, OpenMeteoClient};

/// Application state shared across all handlers
///
/// Everything here is immutable once the server starts. Per-request random
/// sources are derived from `rng_seed` rather than shared.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub itineraries: ItineraryGenerator,
    pub costs: CostPredictor,
    pub sentiment: SentimentAnalyzer,
    pub weather: WeatherAnalyzer,
    pub phrasebook: Phrasebook,
    pub forecast: Arc<OpenMeteoClient>,
    pub live_forecast: bool,
    pub forecast_days: u8,
    pub rng_seed: Option<u64>,
}

impl AppState {
    pub fn new(recommender: Recommender, forecast: Arc<OpenMeteoClient>) -> Self {
        Self {
            recommender,
            itineraries: ItineraryGenerator::new(),
            costs: CostPredictor::new(),
            sentiment: SentimentAnalyzer::new(),
            weather: WeatherAnalyzer::new(),
            phrasebook: Phrasebook::new(),
            forecast,
            live_forecast: false,
            forecast_days: 7,
            rng_seed: None,
        }
    }

    /// Build the state from loaded settings with the built-in catalog
    pub fn from_settings(settings: &Settings) -> Result<Self, ForecastError> {
        let recommender = Recommender::new(
            Arc::new(StaticCatalog::builtin()),
            settings.scoring_weights(),
        );
        let forecast = Arc::new(OpenMeteoClient::from_settings(&settings.weather)?);

        Ok(Self::new(recommender, forecast)
            .with_live_forecast(settings.weather.live_forecast, settings.weather.forecast_days)
            .with_seed(settings.planning.seed))
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn with_live_forecast(mut self, enabled: bool, days: u8) -> Self {
        self.live_forecast = enabled;
        self.forecast_days = days;
        self
    }

    /// Random source for one request: seeded when configured, else from entropy
    pub fn request_rng(&self) -> ChaCha8Rng {
        match self.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("recommender", &self.recommender)
            .field("forecast", &self.forecast)
            .field("live_forecast", &self.live_forecast)
            .field("rng_seed", &self.rng_seed)
            .finish()
    }
}
