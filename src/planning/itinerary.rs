//! Day-by-day itinerary generation.
//!
//! Attraction selection is the only randomized step. Callers pass the random
//! source in, so a seeded generator yields reproducible itineraries.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::planning::tips::travel_tips;

/// Longest trip the generator will lay out
pub const MAX_TRIP_DAYS: u32 = 90;

/// Attractions scheduled per day at most
const ACTIVITIES_PER_DAY: usize = 3;

/// First activity of each day starts at this hour
const DAY_START_HOUR: u32 = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("endDate must not be before startDate")]
    EndBeforeStart,

    #[error("trip is too long: {0} days (maximum {MAX_TRIP_DAYS})")]
    TooLong(i64),

    #[error("date out of range")]
    DateOverflow,
}

/// Input to the itinerary generator
#[derive(Debug, Clone)]
pub struct TripRequest<'a> {
    pub destination: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub travel_style: &'a str,
    pub interests: &'a [String],
    pub group_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub name: String,
    pub kind: &'static str,
    pub duration_hours: u32,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: Uuid,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: u32,
    pub travel_style: String,
    pub group_size: u32,
    pub budget: f64,
    pub estimated_total_cost: f64,
    pub days: Vec<ItineraryDay>,
    pub travel_tips: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day_number: u32,
    pub date: NaiveDate,
    pub activities: Vec<ScheduledActivity>,
    pub accommodation: Accommodation,
    pub transportation: Vec<TransportOption>,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledActivity {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub description: String,
    pub estimated_cost: f64,
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub booking_status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    pub location: String,
    pub cost: f64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub booking_status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub departure_time: &'static str,
    pub arrival_time: &'static str,
    pub cost: f64,
    pub booking_status: &'static str,
}

/// Builds itineraries from per-destination attraction tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryGenerator;

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a complete itinerary, drawing attraction picks from `rng`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &TripRequest<'_>,
        rng: &mut R,
    ) -> Result<Itinerary, ItineraryError> {
        let span = (request.end_date - request.start_date).num_days();
        if span < 0 {
            return Err(ItineraryError::EndBeforeStart);
        }
        let duration = span + 1;
        if duration > i64::from(MAX_TRIP_DAYS) {
            return Err(ItineraryError::TooLong(duration));
        }
        let duration = duration as u32;

        let attractions = attractions_for(request.destination);
        let candidates = filter_attractions(&attractions, request.interests);

        let mut days = Vec::with_capacity(duration as usize);
        let mut total_cost = 0.0;

        for day_number in 1..=duration {
            let date = request
                .start_date
                .checked_add_days(Days::new(u64::from(day_number - 1)))
                .ok_or(ItineraryError::DateOverflow)?;

            let activities =
                schedule_day(request.destination, &candidates, request.travel_style, rng);
            let estimated_cost: f64 = activities.iter().map(|a| a.estimated_cost).sum();
            total_cost += estimated_cost;

            days.push(ItineraryDay {
                day_number,
                date,
                activities,
                accommodation: accommodation_for(request.destination, request.travel_style),
                transportation: transport_for(request.travel_style),
                estimated_cost,
            });
        }

        tracing::debug!(
            "Generated {}-day itinerary for {} ({} candidate attractions)",
            duration,
            request.destination,
            candidates.len()
        );

        Ok(Itinerary {
            id: Uuid::new_v4(),
            title: format!("{} Adventure", request.destination),
            destination: request.destination.to_string(),
            start_date: request.start_date,
            end_date: request.end_date,
            duration,
            travel_style: request.travel_style.to_string(),
            group_size: request.group_size,
            budget: request.budget,
            estimated_total_cost: total_cost,
            days,
            travel_tips: travel_tips(
                request.destination,
                Some(request.travel_style),
                "intermediate",
            ),
            recommendations: style_recommendations(
                request.destination,
                request.travel_style,
                request.interests,
            ),
        })
    }
}

/// Attractions for a destination, or generic ones for unknown places
pub fn attractions_for(destination: &str) -> Vec<Attraction> {
    let table: &[(&str, &'static str, u32, f64)] = match destination {
        "Paris" => &[
            ("Eiffel Tower", "landmark", 2, 30.0),
            ("Louvre Museum", "museum", 3, 20.0),
            ("Notre-Dame Cathedral", "religious", 1, 0.0),
            ("Arc de Triomphe", "landmark", 1, 15.0),
            ("Champs-Élysées", "shopping", 2, 0.0),
            ("Montmartre", "cultural", 2, 0.0),
            ("Seine River Cruise", "activity", 1, 25.0),
        ],
        "Tokyo" => &[
            ("Senso-ji Temple", "religious", 2, 0.0),
            ("Tokyo Skytree", "landmark", 2, 25.0),
            ("Shibuya Crossing", "cultural", 1, 0.0),
            ("Tsukiji Fish Market", "food", 2, 0.0),
            ("Meiji Shrine", "religious", 1, 0.0),
            ("Tokyo Disneyland", "entertainment", 8, 80.0),
        ],
        "New York" => &[
            ("Statue of Liberty", "landmark", 3, 25.0),
            ("Central Park", "nature", 2, 0.0),
            ("Times Square", "cultural", 1, 0.0),
            ("Metropolitan Museum", "museum", 3, 25.0),
            ("Empire State Building", "landmark", 2, 40.0),
            ("Broadway Show", "entertainment", 3, 150.0),
        ],
        _ => {
            return vec![
                generic(destination, "City Center", "cultural", 2, 0.0),
                generic(destination, "Museum", "museum", 2, 15.0),
                generic(destination, "Park", "nature", 1, 0.0),
                generic(destination, "Market", "food", 1, 0.0),
            ]
        }
    };

    table
        .iter()
        .map(|&(name, kind, duration_hours, cost)| Attraction {
            name: name.to_string(),
            kind,
            duration_hours,
            cost,
        })
        .collect()
}

fn generic(destination: &str, suffix: &str, kind: &'static str, hours: u32, cost: f64) -> Attraction {
    Attraction {
        name: format!("{} {}", destination, suffix),
        kind,
        duration_hours: hours,
        cost,
    }
}

/// Keep attractions whose type contains one of the interests
///
/// Falls back to every attraction when no interest matches anything.
pub fn filter_attractions(attractions: &[Attraction], interests: &[String]) -> Vec<Attraction> {
    if interests.is_empty() {
        return attractions.to_vec();
    }

    let interests: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();
    let filtered: Vec<Attraction> = attractions
        .iter()
        .filter(|a| interests.iter().any(|i| a.kind.contains(i.as_str())))
        .cloned()
        .collect();

    if filtered.is_empty() {
        attractions.to_vec()
    } else {
        filtered
    }
}

fn schedule_day<R: Rng + ?Sized>(
    destination: &str,
    candidates: &[Attraction],
    travel_style: &str,
    rng: &mut R,
) -> Vec<ScheduledActivity> {
    let picks: Vec<&Attraction> = candidates
        .choose_multiple(rng, ACTIVITIES_PER_DAY.min(candidates.len()))
        .collect();

    let mut activities = Vec::with_capacity(picks.len() + 1);
    let mut hour = DAY_START_HOUR;

    for (index, attraction) in picks.into_iter().enumerate() {
        activities.push(ScheduledActivity {
            time: format!("{:02}:00", hour),
            activity: attraction.name.clone(),
            location: destination.to_string(),
            description: format!("Visit {} - {} experience", attraction.name, attraction.kind),
            estimated_cost: attraction.cost,
            duration: attraction.duration_hours,
            kind: attraction.kind.to_string(),
            booking_status: "pending",
        });
        // one hour of travel between stops
        hour += attraction.duration_hours + 1;

        if index == 1 {
            activities.push(ScheduledActivity {
                time: format!("{:02}:00", hour),
                activity: "Lunch Break".to_string(),
                location: destination.to_string(),
                description: "Enjoy local cuisine".to_string(),
                estimated_cost: if travel_style == "budget" { 15.0 } else { 50.0 },
                duration: 1,
                kind: "food".to_string(),
                booking_status: "pending",
            });
            hour += 1;
        }
    }

    activities
}

fn accommodation_for(destination: &str, travel_style: &str) -> Accommodation {
    let (kind, label, cost, description) = match travel_style {
        "luxury" => ("5-star hotel", "5-Star Hotel", 300.0, "Luxury 5-star hotel"),
        "adventure" => ("camping", "Camping", 20.0, "Adventure camping"),
        "cultural" => ("boutique hotel", "Boutique Hotel", 150.0, "Cultural boutique hotel"),
        "relaxation" => ("resort", "Resort", 250.0, "Relaxing resort"),
        _ => ("hostel", "Hostel", 30.0, "Budget-friendly hostel"),
    };

    Accommodation {
        name: format!("{} {}", destination, label),
        location: destination.to_string(),
        cost,
        kind,
        description,
        booking_status: "pending",
    }
}

fn transport_for(travel_style: &str) -> Vec<TransportOption> {
    let options: [&'static str; 2] = match travel_style {
        "luxury" => ["private car", "taxi"],
        "adventure" => ["bicycle", "hiking"],
        "relaxation" => ["private car", "walking"],
        _ => ["public transport", "walking"],
    };

    options
        .into_iter()
        .map(|kind| TransportOption {
            kind,
            from: "Hotel",
            to: "City Center",
            departure_time: "09:00",
            arrival_time: "09:30",
            cost: if kind == "public transport" { 5.0 } else { 20.0 },
            booking_status: "pending",
        })
        .collect()
}

fn style_templates(travel_style: &str) -> &'static [&'static str] {
    match travel_style {
        "budget" => &[
            "Free walking tour of {destination}",
            "Visit local markets and street food",
            "Explore public parks and gardens",
        ],
        "luxury" => &[
            "Private guided tour of {destination}",
            "Fine dining at Michelin-starred restaurants",
            "Luxury spa and wellness experiences",
        ],
        "adventure" => &[
            "Hiking and outdoor activities",
            "Water sports and adventure tours",
            "Rock climbing and extreme sports",
        ],
        "cultural" => &[
            "Museum and gallery visits",
            "Historical site exploration",
            "Local cooking classes",
        ],
        "relaxation" => &[
            "Spa and wellness retreats",
            "Beach and coastal relaxation",
            "Meditation and yoga sessions",
        ],
        _ => &[],
    }
}

fn style_recommendations(destination: &str, travel_style: &str, interests: &[String]) -> Vec<String> {
    let mut recommendations: Vec<String> = style_templates(travel_style)
        .iter()
        .map(|t| t.replace("{destination}", destination))
        .collect();

    for interest in interests {
        let interest = interest.to_lowercase();
        if interest.contains("food") {
            recommendations.push(format!("Try local {} cuisine", destination));
        } else if interest.contains("culture") {
            recommendations.push(format!("Visit {} cultural sites", destination));
        } else if interest.contains("nature") {
            recommendations.push(format!("Explore {} natural attractions", destination));
        }
    }

    recommendations
}
