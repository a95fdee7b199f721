use crate::models::{AlternativeKind, AlternativeSet, BudgetRange, UserPreferences};

/// Budget ceilings below this trigger the budget-friendly set
pub const BUDGET_FRIENDLY_MAX: f64 = 2000.0;

struct AlternativeRule {
    kind: AlternativeKind,
    destinations: [&'static str; 5],
    reasoning: &'static str,
}

const BUDGET_FRIENDLY: AlternativeRule = AlternativeRule {
    kind: AlternativeKind::BudgetFriendly,
    destinations: ["Bali", "Thailand", "Vietnam", "Portugal", "Greece"],
    reasoning: "Great value for money destinations",
};

const ADVENTURE: AlternativeRule = AlternativeRule {
    kind: AlternativeKind::Adventure,
    destinations: ["New Zealand", "Iceland", "Costa Rica", "Nepal", "Peru"],
    reasoning: "Perfect for adventure seekers",
};

const CULTURAL: AlternativeRule = AlternativeRule {
    kind: AlternativeKind::Cultural,
    destinations: ["Italy", "Spain", "Japan", "India", "Morocco"],
    reasoning: "Rich cultural experiences",
};

const RELAXATION: AlternativeRule = AlternativeRule {
    kind: AlternativeKind::Relaxation,
    destinations: ["Maldives", "Seychelles", "Bora Bora", "Maui", "Fiji"],
    reasoning: "Perfect for relaxation and wellness",
};

impl AlternativeRule {
    fn to_set(&self) -> AlternativeSet {
        AlternativeSet {
            kind: self.kind,
            destinations: self.destinations.iter().map(|d| d.to_string()).collect(),
            reasoning: self.reasoning.to_string(),
        }
    }
}

/// Build the rule-triggered alternative destination sets
///
/// Rules are independent and may all fire. They never consult the catalog.
pub fn build_alternatives(
    preferences: &UserPreferences,
    budget_range: Option<&BudgetRange>,
    interests: &[String],
) -> Vec<AlternativeSet> {
    let mut alternatives = Vec::new();

    if budget_range.is_some_and(|range| range.max < BUDGET_FRIENDLY_MAX) {
        alternatives.push(BUDGET_FRIENDLY.to_set());
    }

    if any_interest_contains(interests, "adventure") {
        alternatives.push(ADVENTURE.to_set());
    }

    if any_interest_contains(interests, "culture") {
        alternatives.push(CULTURAL.to_set());
    }

    if preferences.travel_style.as_deref() == Some("relaxation") {
        alternatives.push(RELAXATION.to_set());
    }

    alternatives
}

fn any_interest_contains(interests: &[String], needle: &str) -> bool {
    interests.iter().any(|i| i.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sets: &[AlternativeSet]) -> Vec<AlternativeKind> {
        sets.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_no_triggers() {
        let sets = build_alternatives(&UserPreferences::default(), None, &[]);
        assert!(sets.is_empty());
    }

    #[test]
    fn test_budget_threshold_is_strict() {
        let prefs = UserPreferences::default();
        let at = BudgetRange { min: 0.0, max: 2000.0 };
        let below = BudgetRange { min: 0.0, max: 1999.99 };
        assert!(build_alternatives(&prefs, Some(&at), &[]).is_empty());
        assert_eq!(
            kinds(&build_alternatives(&prefs, Some(&below), &[])),
            vec![AlternativeKind::BudgetFriendly]
        );
    }

    #[test]
    fn test_all_rules_fire_together() {
        let prefs = UserPreferences {
            travel_style: Some("relaxation".to_string()),
            ..Default::default()
        };
        let range = BudgetRange { min: 100.0, max: 1500.0 };
        let interests = vec!["Adventure sports".to_string(), "local CULTURE".to_string()];
        let sets = build_alternatives(&prefs, Some(&range), &interests);
        assert_eq!(
            kinds(&sets),
            vec![
                AlternativeKind::BudgetFriendly,
                AlternativeKind::Adventure,
                AlternativeKind::Cultural,
                AlternativeKind::Relaxation,
            ]
        );
        assert_eq!(sets[3].destinations[2], "Bora Bora");
    }
}
