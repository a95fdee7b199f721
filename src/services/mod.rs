// Service exports
pub mod forecast;

pub use forecast::{
    describe_weather_code, ForecastDay, ForecastError, GeoLocation, LiveForecast, OpenMeteoClient,
};
