use crate::models::{BudgetRange, CostLevel, DestinationRecord, ScoringWeights, UserPreferences};

/// Styles that make a destination a reasonable fit for any traveler
const FALLBACK_STYLES: [&str; 2] = ["balanced", "mixed"];

/// Calculate a destination score (0-1) from the caller's preferences
///
/// Scoring formula:
/// score = (
///     cost_match * 0.25 +          # only with a budget range and cost_level
///     activity_match * 0.30 +      # only with at least one interest
///     style_match * 0.20 +         # only with travel_style
///     climate_match * 0.15 +       # only with climate_preference
///     popularity * 0.10            # always
/// )
///
/// Skipped factors add nothing. The sum is not renormalized, so sparse
/// preferences lower the reachable maximum.
pub fn calculate_destination_score(
    destination: &DestinationRecord,
    preferences: &UserPreferences,
    budget_range: Option<&BudgetRange>,
    interests: &[String],
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;

    if let (Some(_), Some(cost_level)) = (budget_range, preferences.cost_level.as_deref()) {
        score += cost_match(destination.cost_level, cost_level) * weights.cost_level;
    }

    if !interests.is_empty() {
        score += activity_match(&destination.activities, interests) * weights.activities;
    }

    if let Some(style) = preferences.travel_style.as_deref() {
        score += style_match(&destination.travel_styles, style) * weights.travel_style;
    }

    if let Some(climate) = preferences.climate_preference.as_deref() {
        score += climate_match(&destination.climate, climate) * weights.climate;
    }

    score += popularity_score(destination) * weights.popularity;

    score.clamp(0.0, 1.0)
}

/// Cost level match (0-1)
/// Unrecognised labels count as medium
#[inline]
pub fn cost_match(destination_level: CostLevel, user_level: &str) -> f64 {
    let user = CostLevel::from_label(user_level).unwrap_or(CostLevel::Medium);
    match destination_level.ordinal().abs_diff(user.ordinal()) {
        0 => 1.0,
        1 => 0.7,
        _ => 0.3,
    }
}

/// Fraction of interests found in the destination's activities (0-1)
///
/// An interest matches when it is a case-insensitive substring of any
/// activity tag. With no interests the result is a neutral 0.5.
#[inline]
pub fn activity_match(activities: &[String], interests: &[String]) -> f64 {
    if interests.is_empty() {
        return 0.5;
    }

    let activities: Vec<String> = activities.iter().map(|a| a.to_lowercase()).collect();
    let matches = interests
        .iter()
        .filter(|interest| {
            let interest = interest.to_lowercase();
            activities.iter().any(|activity| activity.contains(&interest))
        })
        .count();

    matches as f64 / interests.len() as f64
}

/// Travel style match (0-1)
#[inline]
pub fn style_match(destination_styles: &[String], user_style: &str) -> f64 {
    if destination_styles.iter().any(|s| s == user_style) {
        1.0
    } else if destination_styles
        .iter()
        .any(|s| FALLBACK_STYLES.contains(&s.as_str()))
    {
        0.7
    } else {
        0.3
    }
}

/// Climate match (0-1)
#[inline]
pub fn climate_match(destination_climate: &str, user_climate: &str) -> f64 {
    if destination_climate == user_climate {
        1.0
    } else if user_climate == "any" {
        0.8
    } else {
        0.4
    }
}

/// Stored popularity, already normalized
#[inline]
pub fn popularity_score(destination: &DestinationRecord) -> f64 {
    destination.popularity.clamp(0.0, 1.0)
}
