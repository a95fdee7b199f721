use serde::{Deserialize, Serialize};

/// Price tier of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostLevel {
    Low,
    Medium,
    High,
}

impl CostLevel {
    /// Parse a user-supplied label; only the exact lowercase names match
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(CostLevel::Low),
            "medium" => Some(CostLevel::Medium),
            "high" => Some(CostLevel::High),
            _ => None,
        }
    }

    /// Ordinal position: low=1, medium=2, high=3
    pub fn ordinal(self) -> u8 {
        match self {
            CostLevel::Low => 1,
            CostLevel::Medium => 2,
            CostLevel::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CostLevel::Low => "low",
            CostLevel::Medium => "medium",
            CostLevel::High => "high",
        }
    }
}

/// A destination in the recommendation catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub name: String,
    pub category: String,
    pub region: String,
    pub climate: String,
    pub cost_level: CostLevel,
    pub best_seasons: Vec<String>,
    pub activities: Vec<String>,
    pub travel_styles: Vec<String>,
    /// Traveler rating in [0, 5]
    pub rating: f64,
    /// Normalized popularity in [0, 1]
    pub popularity: f64,
}

/// Sparse travel preferences supplied by the caller
///
/// Every field is optional. A missing field skips the matching scoring
/// factor instead of falling back to a default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate_preference: Option<String>,
}

/// Budget bounds for a trip, in the caller's currency
///
/// Only `max` drives recommendations; `min` defaults to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(default)]
    pub min: f64,
    pub max: f64,
}

/// Destination with its aggregate score, borrowed from the catalog
#[derive(Debug, Clone, Copy)]
pub struct ScoredDestination<'a> {
    pub record: &'a DestinationRecord,
    pub score: f64,
}

/// Ranked recommendation as returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub destination: String,
    pub score: f64,
    pub category: String,
    pub region: String,
    pub cost_level: CostLevel,
    pub best_seasons: Vec<String>,
    pub activities: Vec<String>,
    pub travel_styles: Vec<String>,
    pub rating: f64,
    pub popularity: f64,
    pub reasoning: String,
}

/// Rule that produced an alternative destination set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeKind {
    BudgetFriendly,
    Adventure,
    Cultural,
    Relaxation,
}

/// Supplementary destination list triggered by a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeSet {
    #[serde(rename = "type")]
    pub kind: AlternativeKind,
    pub destinations: Vec<String>,
    pub reasoning: String,
}

/// Scoring weights
///
/// The defaults sum to exactly 1.0. Weights are fixed for the lifetime of
/// the process and never adjusted per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub cost_level: f64,
    pub activities: f64,
    pub travel_style: f64,
    pub climate: f64,
    pub popularity: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.cost_level + self.activities + self.travel_style + self.climate + self.popularity
    }

    /// True when the weights sum to 1.0 within floating point tolerance
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-9
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost_level: 0.25,
            activities: 0.30,
            travel_style: 0.20,
            climate: 0.15,
            popularity: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!(weights.is_normalized());
        assert!((weights.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cost_level_labels() {
        assert_eq!(CostLevel::from_label("high"), Some(CostLevel::High));
        assert_eq!(CostLevel::from_label("HIGH"), None);
        assert_eq!(CostLevel::from_label(" low "), None);
        assert_eq!(CostLevel::from_label("cheap"), None);
        assert_eq!(CostLevel::Medium.ordinal(), 2);
    }

    #[test]
    fn test_alternative_kind_serializes_as_type() {
        let set = AlternativeSet {
            kind: AlternativeKind::BudgetFriendly,
            destinations: vec!["Bali".to_string()],
            reasoning: "cheap".to_string(),
        };
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["type"], "budget_friendly");
    }

    #[test]
    fn test_empty_preferences_serialize_to_empty_object() {
        let prefs = UserPreferences::default();
        assert_eq!(serde_json::to_string(&prefs).unwrap(), "{}");
    }
}
