use crate::models::{CostLevel, DestinationRecord};

/// Read-only access to the destination catalog
///
/// Implementations must iterate destinations in a stable order; ranking
/// ties are broken by that order. Implementations are shared across
/// request handlers and must be `Send + Sync`.
pub trait DestinationCatalog: Send + Sync {
    /// All destinations in catalog order
    fn destinations(&self) -> &[DestinationRecord];

    /// Look up a destination by its exact name
    fn get(&self, name: &str) -> Option<&DestinationRecord> {
        self.destinations().iter().find(|d| d.name == name)
    }

    fn len(&self) -> usize {
        self.destinations().len()
    }

    fn is_empty(&self) -> bool {
        self.destinations().is_empty()
    }
}

/// Catalog backed by an in-memory vector
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    destinations: Vec<DestinationRecord>,
}

impl StaticCatalog {
    /// Build a catalog from records in the given order
    pub fn new(destinations: Vec<DestinationRecord>) -> Self {
        Self { destinations }
    }

    /// The built-in destination fixtures
    pub fn builtin() -> Self {
        Self::new(vec![
            record(
                "Paris",
                "city",
                "Europe",
                "temperate",
                CostLevel::High,
                &["spring", "autumn"],
                &["culture", "food", "romance", "shopping"],
                &["luxury", "cultural", "romantic"],
                4.8,
                0.95,
            ),
            record(
                "Tokyo",
                "city",
                "Asia",
                "temperate",
                CostLevel::High,
                &["spring", "autumn"],
                &["culture", "food", "technology", "shopping"],
                &["cultural", "adventure", "luxury"],
                4.7,
                0.92,
            ),
            record(
                "Bali",
                "island",
                "Asia",
                "tropical",
                CostLevel::Medium,
                &["dry"],
                &["beach", "relaxation", "culture", "adventure"],
                &["relaxation", "adventure", "budget"],
                4.6,
                0.88,
            ),
            record(
                "New York",
                "city",
                "North America",
                "temperate",
                CostLevel::High,
                &["spring", "autumn"],
                &["culture", "food", "shopping", "entertainment"],
                &["luxury", "cultural", "adventure"],
                4.5,
                0.90,
            ),
            record(
                "Santorini",
                "island",
                "Europe",
                "mediterranean",
                CostLevel::High,
                &["spring", "autumn"],
                &["romance", "relaxation", "culture", "beach"],
                &["luxury", "romantic", "relaxation"],
                4.9,
                0.94,
            ),
        ])
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DestinationCatalog for StaticCatalog {
    fn destinations(&self) -> &[DestinationRecord] {
        &self.destinations
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    category: &str,
    region: &str,
    climate: &str,
    cost_level: CostLevel,
    best_seasons: &[&str],
    activities: &[&str],
    travel_styles: &[&str],
    rating: f64,
    popularity: f64,
) -> DestinationRecord {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    DestinationRecord {
        name: name.to_string(),
        category: category.to_string(),
        region: region.to_string(),
        climate: climate.to_string(),
        cost_level,
        best_seasons: owned(best_seasons),
        activities: owned(activities),
        travel_styles: owned(travel_styles),
        rating,
        popularity,
    }
}
