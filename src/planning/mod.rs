// Trip planning engines
pub mod cost;
pub mod itinerary;
pub mod tips;

pub use cost::{
    AllocationPreferences, BudgetPlan, CostPrediction, CostPredictor, CostTier, Efficiency,
};
pub use itinerary::{Itinerary, ItineraryError, ItineraryGenerator, TripRequest, MAX_TRIP_DAYS};
pub use tips::{travel_tips, MAX_TIPS};
