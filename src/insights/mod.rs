// Review, weather and language insights
pub mod sentiment;
pub mod translation;
pub mod weather;

pub use sentiment::{ReviewAnalysis, Sentiment, SentimentAnalysis, SentimentAnalyzer, SentimentError};
pub use translation::{Language, Phrasebook, TranslationError};
pub use weather::{WeatherAnalyzer, WeatherError, WeatherInsights};
