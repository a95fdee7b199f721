//! Trip cost estimation and budget allocation.

use serde::Serialize;

/// Share of the trip cost added for miscellaneous expenses
pub const MISC_RATE: f64 = 0.1;

/// Price tier a travel style maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTier {
    Budget,
    Mid,
    Luxury,
}

impl CostTier {
    /// Unknown styles price at the mid tier
    pub fn for_style(travel_style: &str) -> Self {
        match travel_style {
            "budget" | "adventure" => CostTier::Budget,
            "luxury" | "relaxation" => CostTier::Luxury,
            _ => CostTier::Mid,
        }
    }
}

/// Daily price of one category across the three tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierPrices {
    pub budget: f64,
    pub mid: f64,
    pub luxury: f64,
}

impl TierPrices {
    const fn new(budget: f64, mid: f64, luxury: f64) -> Self {
        Self { budget, mid, luxury }
    }

    pub fn at(&self, tier: CostTier) -> f64 {
        match tier {
            CostTier::Budget => self.budget,
            CostTier::Mid => self.mid,
            CostTier::Luxury => self.luxury,
        }
    }

    pub fn mean(&self) -> f64 {
        (self.budget + self.mid + self.luxury) / 3.0
    }
}

/// Per-day price table for a destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostProfile {
    pub accommodation: TierPrices,
    pub food: TierPrices,
    pub transportation: TierPrices,
    pub activities: TierPrices,
    pub cost_index: f64,
}

const PARIS: CostProfile = CostProfile {
    accommodation: TierPrices::new(80.0, 150.0, 400.0),
    food: TierPrices::new(30.0, 60.0, 120.0),
    transportation: TierPrices::new(15.0, 25.0, 50.0),
    activities: TierPrices::new(20.0, 40.0, 80.0),
    cost_index: 1.2,
};

const TOKYO: CostProfile = CostProfile {
    accommodation: TierPrices::new(70.0, 140.0, 350.0),
    food: TierPrices::new(25.0, 50.0, 100.0),
    transportation: TierPrices::new(12.0, 20.0, 40.0),
    activities: TierPrices::new(18.0, 35.0, 70.0),
    cost_index: 1.1,
};

const NEW_YORK: CostProfile = CostProfile {
    accommodation: TierPrices::new(100.0, 200.0, 500.0),
    food: TierPrices::new(35.0, 70.0, 140.0),
    transportation: TierPrices::new(20.0, 30.0, 60.0),
    activities: TierPrices::new(25.0, 50.0, 100.0),
    cost_index: 1.4,
};

const GENERIC: CostProfile = CostProfile {
    accommodation: TierPrices::new(60.0, 120.0, 300.0),
    food: TierPrices::new(25.0, 50.0, 100.0),
    transportation: TierPrices::new(15.0, 25.0, 50.0),
    activities: TierPrices::new(20.0, 40.0, 80.0),
    cost_index: 1.0,
};

impl CostProfile {
    /// Price table for a destination, generic for unknown places
    pub fn for_destination(destination: &str) -> &'static CostProfile {
        match destination {
            "Paris" => &PARIS,
            "Tokyo" => &TOKYO,
            "New York" => &NEW_YORK,
            _ => &GENERIC,
        }
    }
}

/// Price multiplier for a season; unknown or absent seasons are neutral
pub fn seasonal_factor(season: Option<&str>) -> f64 {
    match season {
        Some("spring") => 1.1,
        Some("summer") => 1.3,
        Some("autumn") => 1.0,
        Some("winter") => 0.8,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBreakdown {
    pub accommodation: f64,
    pub food: f64,
    pub transportation: f64,
    pub activities: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostPrediction {
    pub destination: String,
    pub duration: u32,
    pub travel_style: String,
    pub group_size: u32,
    pub season: Option<String>,
    pub daily_breakdown: DailyBreakdown,
    pub total_cost: f64,
    pub miscellaneous: f64,
    pub seasonal_factor: f64,
    pub cost_index: f64,
    pub recommendations: Vec<String>,
}

/// Budget allocation preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationPreferences {
    pub food_focused: bool,
    pub activity_focused: bool,
    pub luxury_accommodation: bool,
}

/// Share of the budget, or per-day amount, per category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    pub accommodation: f64,
    pub food: f64,
    pub transportation: f64,
    pub activities: f64,
    pub miscellaneous: f64,
}

impl Default for CategoryAllocation {
    fn default() -> Self {
        Self {
            accommodation: 0.40,
            food: 0.25,
            transportation: 0.15,
            activities: 0.15,
            miscellaneous: 0.05,
        }
    }
}

impl CategoryAllocation {
    /// Shift shares toward the categories the traveller prioritizes
    pub fn adjusted(preferences: AllocationPreferences) -> Self {
        let mut allocation = Self::default();

        if preferences.food_focused {
            allocation.food += 0.1;
            allocation.accommodation -= 0.05;
            allocation.activities -= 0.05;
        }

        if preferences.activity_focused {
            allocation.activities += 0.1;
            allocation.accommodation -= 0.05;
            allocation.food -= 0.05;
        }

        if preferences.luxury_accommodation {
            allocation.accommodation += 0.1;
            allocation.food -= 0.05;
            allocation.activities -= 0.05;
        }

        allocation
    }

    fn scaled(&self, amount: f64) -> Self {
        Self {
            accommodation: round2(amount * self.accommodation),
            food: round2(amount * self.food),
            transportation: round2(amount * self.transportation),
            activities: round2(amount * self.activities),
            miscellaneous: round2(amount * self.miscellaneous),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Efficiency {
    Budget,
    Balanced,
    Luxury,
}

impl Efficiency {
    /// Compare a daily amount with the mean of a category's tier prices
    pub fn classify(amount: f64, prices: &TierPrices) -> Self {
        let mean = prices.mean();
        if amount < mean * 0.8 {
            Efficiency::Budget
        } else if amount > mean * 1.2 {
            Efficiency::Luxury
        } else {
            Efficiency::Balanced
        }
    }
}

/// Per-category efficiency; miscellaneous has no price table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEfficiency {
    pub accommodation: Efficiency,
    pub food: Efficiency,
    pub transportation: Efficiency,
    pub activities: Efficiency,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub total_budget: f64,
    pub daily_budget: f64,
    pub duration: u32,
    pub destination: String,
    pub category_allocation: CategoryAllocation,
    pub recommendations: Vec<String>,
    pub budget_efficiency: BudgetEfficiency,
}

/// Estimates trip costs from static per-destination price tables
#[derive(Debug, Clone, Copy, Default)]
pub struct CostPredictor;

impl CostPredictor {
    pub fn new() -> Self {
        Self
    }

    /// Predict the cost of a trip
    ///
    /// Daily prices are scaled by group size and the seasonal factor. The
    /// trip total adds [`MISC_RATE`] on top for miscellaneous expenses.
    pub fn predict(
        &self,
        destination: &str,
        duration: u32,
        travel_style: &str,
        group_size: u32,
        season: Option<&str>,
    ) -> CostPrediction {
        let profile = CostProfile::for_destination(destination);
        let tier = CostTier::for_style(travel_style);
        let group = f64::from(group_size);
        let factor = seasonal_factor(season);

        let accommodation = profile.accommodation.at(tier) * group;
        let food = profile.food.at(tier) * group;
        let transportation = profile.transportation.at(tier) * group;
        let activities = profile.activities.at(tier) * group;

        let total_daily = (accommodation + food + transportation + activities) * factor;
        let total_trip = total_daily * f64::from(duration);
        let misc = total_trip * MISC_RATE;

        CostPrediction {
            destination: destination.to_string(),
            duration,
            travel_style: travel_style.to_string(),
            group_size,
            season: season.map(str::to_string),
            daily_breakdown: DailyBreakdown {
                accommodation: round2(accommodation * factor),
                food: round2(food * factor),
                transportation: round2(transportation * factor),
                activities: round2(activities * factor),
                total: round2(total_daily),
            },
            total_cost: round2(total_trip + misc),
            miscellaneous: round2(misc),
            seasonal_factor: factor,
            cost_index: profile.cost_index,
            recommendations: cost_recommendations(destination, travel_style),
        }
    }

    /// Split a total budget into per-day category amounts
    pub fn optimize_budget(
        &self,
        total_budget: f64,
        destination: &str,
        duration: u32,
        preferences: AllocationPreferences,
    ) -> BudgetPlan {
        let profile = CostProfile::for_destination(destination);
        let daily_budget = total_budget / f64::from(duration.max(1));
        let per_day = CategoryAllocation::adjusted(preferences).scaled(daily_budget);

        BudgetPlan {
            total_budget,
            daily_budget: round2(daily_budget),
            duration,
            destination: destination.to_string(),
            category_allocation: per_day,
            recommendations: allocation_recommendations(&per_day),
            budget_efficiency: BudgetEfficiency {
                accommodation: Efficiency::classify(per_day.accommodation, &profile.accommodation),
                food: Efficiency::classify(per_day.food, &profile.food),
                transportation: Efficiency::classify(
                    per_day.transportation,
                    &profile.transportation,
                ),
                activities: Efficiency::classify(per_day.activities, &profile.activities),
            },
        }
    }
}

fn cost_recommendations(destination: &str, travel_style: &str) -> Vec<String> {
    let style: &[&str] = match travel_style {
        "budget" => &[
            "Consider staying in hostels or budget accommodations",
            "Use public transportation instead of taxis",
            "Eat at local markets and street food vendors",
            "Look for free activities and attractions",
            "Book flights and accommodations in advance",
        ],
        "luxury" => &[
            "Book premium experiences and services",
            "Consider all-inclusive packages",
            "Opt for private transportation",
            "Reserve at high-end restaurants",
            "Include spa and wellness experiences",
        ],
        _ => &[],
    };

    let mut recommendations: Vec<String> = style.iter().map(|s| s.to_string()).collect();
    recommendations.push(format!("Research {} cost of living before your trip", destination));
    recommendations.push("Set aside 10-15% of your budget for unexpected expenses".to_string());
    recommendations.push("Consider travel insurance for additional protection".to_string());
    recommendations
}

fn allocation_recommendations(per_day: &CategoryAllocation) -> Vec<String> {
    let mut recommendations = Vec::new();

    if per_day.accommodation < 50.0 {
        recommendations.push("Consider hostels or shared accommodations");
    } else if per_day.accommodation > 200.0 {
        recommendations.push("Look for luxury hotels or resorts");
    }

    if per_day.food < 30.0 {
        recommendations.push("Focus on street food and local markets");
    } else if per_day.food > 80.0 {
        recommendations.push("Consider fine dining experiences");
    }

    if per_day.activities < 20.0 {
        recommendations.push("Look for free activities and attractions");
    } else if per_day.activities > 60.0 {
        recommendations.push("Consider premium tours and experiences");
    }

    recommendations.into_iter().map(String::from).collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
