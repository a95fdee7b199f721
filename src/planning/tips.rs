/// Upper bound on tips returned to a caller
pub const MAX_TIPS: usize = 10;

const BUDGET_TIPS: [&str; 4] = [
    "Use public transportation to save money",
    "Eat at local markets and street food vendors",
    "Book accommodations in advance for better rates",
    "Look for free activities and attractions",
];

const LUXURY_TIPS: [&str; 4] = [
    "Book premium services and experiences in advance",
    "Consider hiring a local guide for personalized experiences",
    "Reserve at high-end restaurants early",
    "Opt for premium transportation options",
];

const BEGINNER_TIPS: [&str; 4] = [
    "Start with popular tourist destinations",
    "Join guided tours for better understanding",
    "Stay in well-reviewed accommodations",
    "Plan your itinerary in detail",
];

const EXPERT_TIPS: [&str; 4] = [
    "Explore off-the-beaten-path locations",
    "Connect with locals for authentic experiences",
    "Be flexible with your plans",
    "Try unique local experiences",
];

/// Personalized travel tips
///
/// General tips come first, then style and experience specific ones. The
/// list is truncated to [`MAX_TIPS`], so experience tips are partly cut when
/// a style list is also present.
pub fn travel_tips(
    destination: &str,
    travel_style: Option<&str>,
    experience_level: &str,
) -> Vec<String> {
    let mut tips = vec![
        format!("Research local customs and etiquette in {}", destination),
        "Pack appropriate clothing for the destination's climate".to_string(),
        "Keep important documents and emergency contacts handy".to_string(),
        "Learn basic phrases in the local language".to_string(),
        "Have travel insurance for unexpected situations".to_string(),
    ];

    let style_tips: &[&str] = match travel_style {
        Some("budget") => &BUDGET_TIPS,
        Some("luxury") => &LUXURY_TIPS,
        _ => &[],
    };
    tips.extend(style_tips.iter().map(|t| t.to_string()));

    let experience_tips: &[&str] = match experience_level {
        "beginner" => &BEGINNER_TIPS,
        "expert" => &EXPERT_TIPS,
        _ => &[],
    };
    tips.extend(experience_tips.iter().map(|t| t.to_string()));

    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_tips_only() {
        let tips = travel_tips("Rome", None, "intermediate");
        assert_eq!(tips.len(), 5);
        assert_eq!(tips[0], "Research local customs and etiquette in Rome");
    }

    #[test]
    fn test_capped_at_ten() {
        let tips = travel_tips("Rome", Some("budget"), "expert");
        assert_eq!(tips.len(), MAX_TIPS);
        assert_eq!(tips[5], BUDGET_TIPS[0]);
        assert_eq!(tips[9], EXPERT_TIPS[0]);
    }

    #[test]
    fn test_beginner_without_style() {
        let tips = travel_tips("Rome", Some("cultural"), "beginner");
        assert_eq!(tips.len(), 9);
        assert_eq!(tips[8], BEGINNER_TIPS[3]);
    }
}
