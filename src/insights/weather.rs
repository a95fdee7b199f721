//! Seasonal weather insights from static climate profiles.
//!
//! The per-day forecast here is simulated around the seasonal averages. Live
//! data comes from [`crate::services::forecast`] instead.

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::planning::MAX_TRIP_DAYS;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Maximum random swing applied to the seasonal mean temperature
const TEMPERATURE_JITTER: f64 = 3.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("travelDates.end must not be before travelDates.start")]
    EndBeforeStart,

    #[error("trip is too long: {0} days (maximum {MAX_TRIP_DAYS})")]
    TooLong(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Climate {
    Temperate,
    Tropical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    Dry,
    Wet,
}

impl Season {
    /// Season a given date falls in for a climate
    pub fn of(date: NaiveDate, climate: Climate) -> Self {
        let month = date.month();
        match climate {
            Climate::Tropical if (4..=9).contains(&month) => Season::Dry,
            Climate::Tropical => Season::Wet,
            Climate::Temperate => match month {
                3..=5 => Season::Spring,
                6..=8 => Season::Summer,
                9..=11 => Season::Autumn,
                _ => Season::Winter,
            },
        }
    }

    fn outlook(&self) -> [&'static str; 4] {
        match self {
            Season::Spring => [
                "Mild temperatures perfect for outdoor activities",
                "Cherry blossoms in many destinations",
                "Good time for sightseeing and cultural activities",
                "Pack layers for variable weather",
            ],
            Season::Summer => [
                "Warm weather ideal for beach and outdoor activities",
                "Peak tourist season with higher prices",
                "Longer daylight hours for exploration",
                "Pack light clothing and sun protection",
            ],
            Season::Autumn => [
                "Comfortable temperatures for travel",
                "Beautiful fall colors in many destinations",
                "Fewer crowds than summer",
                "Pack layers for cooler evenings",
            ],
            Season::Winter => [
                "Cold weather, pack warm clothing",
                "Lower prices and fewer crowds",
                "Winter sports and activities available",
                "Shorter daylight hours",
            ],
            Season::Dry => [
                "Excellent weather for outdoor activities",
                "Minimal rainfall, pack light",
                "Good time for beach and adventure activities",
                "Stay hydrated in hot temperatures",
            ],
            Season::Wet => [
                "Rainy season, pack rain gear",
                "Lush landscapes and fewer crowds",
                "Indoor activities recommended",
                "Lower prices during off-peak season",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rainfall {
    Low,
    Moderate,
    High,
}

impl Rainfall {
    pub fn chance(&self) -> f64 {
        match self {
            Rainfall::Low => 0.1,
            Rainfall::Moderate => 0.3,
            Rainfall::High => 0.6,
        }
    }

    fn score(&self) -> f64 {
        match self {
            Rainfall::Low => 1.0,
            Rainfall::Moderate => 0.7,
            Rainfall::High => 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sunshine {
    Low,
    Moderate,
    Good,
    Excellent,
}

impl Sunshine {
    pub fn hours(&self) -> u32 {
        match self {
            Sunshine::Low => 4,
            Sunshine::Moderate => 6,
            Sunshine::Good => 8,
            Sunshine::Excellent => 10,
        }
    }

    fn score(&self) -> f64 {
        match self {
            Sunshine::Low => 0.4,
            Sunshine::Moderate => 0.7,
            Sunshine::Good => 0.9,
            Sunshine::Excellent => 1.0,
        }
    }

    fn is_bright(&self) -> bool {
        matches!(self, Sunshine::Good | Sunshine::Excellent)
    }
}

/// Typical conditions during one season
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonConditions {
    pub temp_range: (i32, i32),
    pub rainfall: Rainfall,
    pub sunshine: Sunshine,
}

impl SeasonConditions {
    const fn new(low: i32, high: i32, rainfall: Rainfall, sunshine: Sunshine) -> Self {
        Self {
            temp_range: (low, high),
            rainfall,
            sunshine,
        }
    }

    fn mean_temperature(&self) -> f64 {
        f64::from(self.temp_range.0 + self.temp_range.1) / 2.0
    }
}

/// Used when a profile has no entry for the season
const FALLBACK_CONDITIONS: SeasonConditions =
    SeasonConditions::new(15, 25, Rainfall::Moderate, Sunshine::Good);

/// Static climate data for one destination
#[derive(Debug)]
pub struct ClimateProfile {
    pub climate: Climate,
    pub seasons: &'static [(Season, SeasonConditions)],
    pub best_months: &'static [u32],
    pub rainy_months: &'static [u32],
    pub peak_season: &'static [u32],
}

impl ClimateProfile {
    pub fn for_destination(destination: &str) -> &'static ClimateProfile {
        match destination {
            "Paris" => &PARIS,
            "Tokyo" => &TOKYO,
            "Bali" => &BALI,
            "New York" => &NEW_YORK,
            _ => &GENERIC,
        }
    }

    pub fn conditions(&self, season: Season) -> SeasonConditions {
        self.seasons
            .iter()
            .find(|(s, _)| *s == season)
            .map(|(_, c)| *c)
            .unwrap_or(FALLBACK_CONDITIONS)
    }
}

static PARIS: ClimateProfile = ClimateProfile {
    climate: Climate::Temperate,
    seasons: &[
        (Season::Spring, SeasonConditions::new(8, 18, Rainfall::Moderate, Sunshine::Good)),
        (Season::Summer, SeasonConditions::new(15, 25, Rainfall::Low, Sunshine::Excellent)),
        (Season::Autumn, SeasonConditions::new(10, 20, Rainfall::Moderate, Sunshine::Good)),
        (Season::Winter, SeasonConditions::new(2, 8, Rainfall::High, Sunshine::Low)),
    ],
    best_months: &[5, 6, 9, 10],
    rainy_months: &[11, 12, 1, 2],
    peak_season: &[6, 7, 8],
};

static TOKYO: ClimateProfile = ClimateProfile {
    climate: Climate::Temperate,
    seasons: &[
        (Season::Spring, SeasonConditions::new(10, 20, Rainfall::Moderate, Sunshine::Good)),
        (Season::Summer, SeasonConditions::new(20, 30, Rainfall::High, Sunshine::Moderate)),
        (Season::Autumn, SeasonConditions::new(15, 25, Rainfall::Moderate, Sunshine::Good)),
        (Season::Winter, SeasonConditions::new(0, 10, Rainfall::Low, Sunshine::Good)),
    ],
    best_months: &[3, 4, 10, 11],
    rainy_months: &[6, 7, 8, 9],
    peak_season: &[3, 4, 10, 11],
};

static BALI: ClimateProfile = ClimateProfile {
    climate: Climate::Tropical,
    seasons: &[
        (Season::Dry, SeasonConditions::new(25, 35, Rainfall::Low, Sunshine::Excellent)),
        (Season::Wet, SeasonConditions::new(23, 32, Rainfall::High, Sunshine::Moderate)),
    ],
    best_months: &[4, 5, 6, 7, 8, 9],
    rainy_months: &[10, 11, 12, 1, 2, 3],
    peak_season: &[6, 7, 8],
};

static NEW_YORK: ClimateProfile = ClimateProfile {
    climate: Climate::Temperate,
    seasons: &[
        (Season::Spring, SeasonConditions::new(5, 18, Rainfall::Moderate, Sunshine::Good)),
        (Season::Summer, SeasonConditions::new(18, 30, Rainfall::Moderate, Sunshine::Excellent)),
        (Season::Autumn, SeasonConditions::new(8, 20, Rainfall::Moderate, Sunshine::Good)),
        (Season::Winter, SeasonConditions::new(-5, 5, Rainfall::Moderate, Sunshine::Low)),
    ],
    best_months: &[4, 5, 9, 10],
    rainy_months: &[3, 4, 5, 6, 7, 8, 9, 10, 11],
    peak_season: &[6, 7, 8],
};

static GENERIC: ClimateProfile = ClimateProfile {
    climate: Climate::Temperate,
    seasons: &[
        (Season::Spring, SeasonConditions::new(10, 20, Rainfall::Moderate, Sunshine::Good)),
        (Season::Summer, SeasonConditions::new(18, 28, Rainfall::Moderate, Sunshine::Excellent)),
        (Season::Autumn, SeasonConditions::new(8, 18, Rainfall::Moderate, Sunshine::Good)),
        (Season::Winter, SeasonConditions::new(0, 10, Rainfall::Moderate, Sunshine::Low)),
    ],
    best_months: &[4, 5, 6, 9, 10],
    rainy_months: &[11, 12, 1, 2],
    peak_season: &[6, 7, 8],
};

#[derive(Debug, Clone, Serialize)]
pub struct TemperatureBand {
    pub high: f64,
    pub low: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayConditions {
    pub rainfall: f64,
    pub sunshine: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedDay {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub temperature: TemperatureBand,
    pub conditions: DayConditions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityAnalysis {
    pub overall_score: f64,
    pub temperature_score: f64,
    pub rainfall_score: f64,
    pub sunshine_score: f64,
    pub suitability: &'static str,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackingList {
    pub clothing: Vec<&'static str>,
    pub accessories: Vec<&'static str>,
    pub essentials: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestTime {
    pub best_months: Vec<&'static str>,
    pub peak_season: Vec<&'static str>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherInsights {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: u32,
    pub season: Season,
    pub weather_conditions: SeasonConditions,
    pub weather_forecast: Vec<SimulatedDay>,
    pub suitability_analysis: SuitabilityAnalysis,
    pub packing_recommendations: PackingList,
    pub activity_recommendations: Vec<&'static str>,
    pub best_time_to_visit: BestTime,
    pub weather_alerts: Vec<&'static str>,
}

/// Builds travel weather insights from climate profiles
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherAnalyzer;

impl WeatherAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Insights for a trip; the season is taken from the start date
    pub fn insights<R: Rng + ?Sized>(
        &self,
        destination: &str,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut R,
    ) -> Result<WeatherInsights, WeatherError> {
        let span = (end - start).num_days();
        if span < 0 {
            return Err(WeatherError::EndBeforeStart);
        }
        let duration = span + 1;
        if duration > i64::from(MAX_TRIP_DAYS) {
            return Err(WeatherError::TooLong(duration));
        }
        let duration = duration as u32;

        let profile = ClimateProfile::for_destination(destination);
        let season = Season::of(start, profile.climate);
        let conditions = profile.conditions(season);

        Ok(WeatherInsights {
            destination: destination.to_string(),
            start_date: start,
            end_date: end,
            duration,
            season,
            weather_conditions: conditions,
            weather_forecast: simulate_forecast(start, duration, &conditions, rng),
            suitability_analysis: suitability(season, &conditions),
            packing_recommendations: packing_list(&conditions, duration),
            activity_recommendations: activity_suggestions(&conditions),
            best_time_to_visit: best_time(profile),
            weather_alerts: alerts(&conditions, season),
        })
    }
}

/// Per-day forecast jittered around the seasonal mean
pub fn simulate_forecast<R: Rng + ?Sized>(
    start: NaiveDate,
    duration: u32,
    conditions: &SeasonConditions,
    rng: &mut R,
) -> Vec<SimulatedDay> {
    let mean = conditions.mean_temperature();
    let rainfall = conditions.rainfall.chance();

    (0..duration)
        .filter_map(|offset| start.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| {
            let daily = round1(mean + rng.gen_range(-TEMPERATURE_JITTER..=TEMPERATURE_JITTER));
            SimulatedDay {
                date,
                day_of_week: date.format("%A").to_string(),
                temperature: TemperatureBand {
                    high: round1(daily + 3.0),
                    low: round1(daily - 3.0),
                    average: daily,
                },
                conditions: DayConditions {
                    rainfall,
                    sunshine: conditions.sunshine.hours(),
                    description: describe(daily, rainfall),
                },
            }
        })
        .collect()
}

fn describe(temperature: f64, rainfall_chance: f64) -> &'static str {
    if rainfall_chance > 0.5 {
        "Rainy"
    } else if temperature > 25.0 {
        "Hot and sunny"
    } else if temperature > 15.0 {
        "Mild and pleasant"
    } else if temperature > 5.0 {
        "Cool"
    } else {
        "Cold"
    }
}

fn temperature_score(temperature: f64) -> f64 {
    if (15.0..=25.0).contains(&temperature) {
        1.0
    } else if (10.0..=30.0).contains(&temperature) {
        0.8
    } else if (5.0..=35.0).contains(&temperature) {
        0.6
    } else {
        0.3
    }
}

fn suitability(season: Season, conditions: &SeasonConditions) -> SuitabilityAnalysis {
    let temperature = temperature_score(conditions.mean_temperature());
    let rainfall = conditions.rainfall.score();
    let sunshine = conditions.sunshine.score();
    let overall = (temperature + rainfall + sunshine) / 3.0;

    let (level, mut recommendations) = if overall >= 0.8 {
        (
            "excellent",
            vec![
                "Excellent weather conditions for travel",
                "Perfect time to visit this destination",
            ],
        )
    } else if overall >= 0.6 {
        (
            "good",
            vec![
                "Good weather conditions overall",
                "Consider packing for variable weather",
            ],
        )
    } else if overall >= 0.4 {
        (
            "fair",
            vec![
                "Weather conditions are acceptable",
                "Be prepared for some weather challenges",
            ],
        )
    } else {
        (
            "poor",
            vec![
                "Weather conditions may impact your trip",
                "Consider alternative dates or indoor activities",
            ],
        )
    };
    recommendations.extend(season.outlook());

    SuitabilityAnalysis {
        overall_score: round2(overall),
        temperature_score: round2(temperature),
        rainfall_score: round2(rainfall),
        sunshine_score: round2(sunshine),
        suitability: level,
        recommendations,
    }
}

fn packing_list(conditions: &SeasonConditions, duration: u32) -> PackingList {
    let (low, high) = conditions.temp_range;

    let clothing = if high > 25 {
        vec!["Light cotton clothing", "Shorts and t-shirts", "Summer dresses"]
    } else if low < 10 {
        vec!["Warm jacket", "Thermal underwear", "Winter boots"]
    } else {
        vec!["Light layers", "Sweaters", "Comfortable walking shoes"]
    };

    let mut accessories = Vec::new();
    if conditions.rainfall == Rainfall::High {
        accessories.extend(["Waterproof jacket", "Umbrella", "Waterproof shoes"]);
    }
    if high > 25 {
        accessories.extend(["Sunglasses", "Sun hat", "Sunscreen"]);
    }
    if low < 10 {
        accessories.extend(["Gloves", "Scarf", "Warm hat"]);
    }

    let mut essentials = vec!["Travel documents", "First aid kit", "Phone charger", "Camera"];
    if duration > 7 {
        essentials.push("Laundry supplies");
    }

    PackingList {
        clothing,
        accessories,
        essentials,
    }
}

fn activity_suggestions(conditions: &SeasonConditions) -> Vec<&'static str> {
    let (low, high) = conditions.temp_range;

    let mut activities = if high > 25 {
        vec!["Beach activities", "Swimming", "Outdoor dining", "Sunset viewing"]
    } else if low < 10 {
        vec!["Indoor museums", "Hot springs", "Winter sports", "Cozy cafes"]
    } else {
        vec!["Walking tours", "Outdoor sightseeing", "Hiking", "Photography"]
    };

    if conditions.rainfall == Rainfall::High {
        activities.extend([
            "Indoor attractions",
            "Shopping malls",
            "Museums and galleries",
            "Spa and wellness",
        ]);
    }

    if conditions.sunshine.is_bright() {
        activities.extend(["Outdoor photography", "Picnics", "Outdoor markets", "Park visits"]);
    }

    activities
}

fn month_names(months: &[u32]) -> Vec<&'static str> {
    months
        .iter()
        .filter_map(|m| MONTH_NAMES.get((*m as usize).wrapping_sub(1)).copied())
        .collect()
}

fn best_time(profile: &ClimateProfile) -> BestTime {
    let best = month_names(profile.best_months);
    BestTime {
        reasoning: format!(
            "Best weather conditions and fewer crowds during {}",
            best.join(", ")
        ),
        best_months: best,
        peak_season: month_names(profile.peak_season),
    }
}

fn alerts(conditions: &SeasonConditions, season: Season) -> Vec<&'static str> {
    let (low, high) = conditions.temp_range;
    let mut alerts = Vec::new();

    if high > 30 {
        alerts.push("High temperature alert - stay hydrated and avoid midday sun");
    }
    if low < 0 {
        alerts.push("Freezing temperatures - pack warm clothing");
    }
    if conditions.rainfall == Rainfall::High {
        alerts.push("Heavy rainfall expected - pack rain gear and plan indoor activities");
    }
    if season == Season::Summer {
        alerts.push("Peak season - expect higher prices and crowds");
    }

    alerts
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
