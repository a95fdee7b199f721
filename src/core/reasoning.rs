use crate::models::{DestinationRecord, UserPreferences};

/// Rating at or above which a destination counts as highly rated
pub const HIGH_RATING_THRESHOLD: f64 = 4.5;

/// Used when no individual criterion matched
pub const GENERIC_REASON: &str = "Great overall destination";

/// Explain why a destination was recommended
///
/// Reasons are appended in a fixed order (cost, activities, style, rating)
/// and joined with "; ".
pub fn build_reasoning(
    destination: &DestinationRecord,
    preferences: &UserPreferences,
    interests: &[String],
) -> String {
    let mut reasons = Vec::with_capacity(4);

    if let Some(cost_level) = preferences.cost_level.as_deref() {
        if destination.cost_level.as_str() == cost_level {
            reasons.push(format!(
                "Matches your {} budget preference",
                destination.cost_level.as_str()
            ));
        }
    }

    let matching = matching_activities(&destination.activities, interests);
    if !matching.is_empty() {
        reasons.push(format!("Perfect for {} activities", matching.join(", ")));
    }

    if let Some(style) = preferences.travel_style.as_deref() {
        if destination.travel_styles.iter().any(|s| s == style) {
            reasons.push(format!("Ideal for {} travel", style));
        }
    }

    if destination.rating >= HIGH_RATING_THRESHOLD {
        reasons.push("Highly rated by travelers".to_string());
    }

    if reasons.is_empty() {
        GENERIC_REASON.to_string()
    } else {
        reasons.join("; ")
    }
}

/// Activities, in destination order, hit by at least one interest
fn matching_activities<'a>(activities: &'a [String], interests: &[String]) -> Vec<&'a str> {
    let interests: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();
    activities
        .iter()
        .filter(|activity| {
            let activity = activity.to_lowercase();
            interests.iter().any(|interest| activity.contains(interest))
        })
        .map(String::as_str)
        .collect()
}
