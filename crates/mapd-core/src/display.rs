//! Presentation metadata for the closed enums
//!
//! Icons are SF Symbol names and colors are the palette names used by the
//! mobile client. Nothing in the store depends on these values.

use serde::Serialize;

use crate::model::{ChecklistCategory, Priority, TravelInterest, TravelStyle, TripType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Empty where the client shows no description
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'static str,
}

impl DisplayInfo {
    const fn new(
        label: &'static str,
        icon: &'static str,
        color: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            label,
            icon,
            color,
            description,
        }
    }
}

pub fn travel_style(style: TravelStyle) -> DisplayInfo {
    let label = style.as_str();
    match style {
        TravelStyle::Adventure => DisplayInfo::new(
            label,
            "mountain.2.fill",
            "orange",
            "Seeking thrills and outdoor activities",
        ),
        TravelStyle::Relaxation => DisplayInfo::new(
            label,
            "beach.umbrella.fill",
            "blue",
            "Preferring peaceful and restorative experiences",
        ),
        TravelStyle::Cultural => DisplayInfo::new(
            label,
            "building.columns.fill",
            "brown",
            "Interested in history, art, and local traditions",
        ),
        TravelStyle::FoodAndDrink => DisplayInfo::new(
            label,
            "fork.knife",
            "red",
            "Exploring culinary experiences and local cuisine",
        ),
    }
}

pub fn travel_interest(interest: TravelInterest) -> DisplayInfo {
    let (icon, color, description) = match interest {
        TravelInterest::Museums => ("building.columns", "blue", "Explore art, history, and science"),
        TravelInterest::Nature => ("leaf.fill", "green", "Discover natural landscapes and wildlife"),
        TravelInterest::Food => (
            "fork.knife",
            "orange",
            "Indulge in culinary delights and local cuisine",
        ),
        TravelInterest::Nightlife => (
            "moon.stars.fill",
            "purple",
            "Experience vibrant evenings and entertainment",
        ),
        TravelInterest::History => ("book.fill", "brown", "Delve into the past and historical sites"),
        TravelInterest::Adventure => (
            "figure.hiking",
            "red",
            "Seek thrilling activities and outdoor sports",
        ),
        TravelInterest::Beaches => (
            "beach.umbrella",
            "cyan",
            "Relax by the sea and enjoy coastal views",
        ),
        TravelInterest::Architecture => (
            "building.2.fill",
            "gray",
            "Admire unique buildings and urban design",
        ),
        TravelInterest::Shopping => (
            "bag.fill",
            "pink",
            "Discover local markets and retail therapy",
        ),
        TravelInterest::Photography => (
            "camera.fill",
            "yellow",
            "Capture beautiful moments and scenery",
        ),
        TravelInterest::Wildlife => (
            "pawprint.fill",
            "mint",
            "Observe animals in their natural habitats",
        ),
        TravelInterest::Festivals => (
            "party.popper.fill",
            "indigo",
            "Immerse in cultural celebrations and events",
        ),
        TravelInterest::Wellness => (
            "heart.circle.fill",
            "teal",
            "Focus on health, relaxation, and well-being",
        ),
        TravelInterest::Luxury => (
            "crown.fill",
            "purple",
            "Enjoy high-end experiences and exclusive services",
        ),
    };
    DisplayInfo::new(interest.as_str(), icon, color, description)
}

pub fn trip_type(trip_type: TripType) -> DisplayInfo {
    let icon = match trip_type {
        TripType::Solo => "person.fill",
        TripType::Couple => "heart.fill",
        TripType::Family => "house.fill",
        TripType::Friends => "person.3.fill",
    };
    DisplayInfo::new(trip_type.as_str(), icon, "accent", "")
}

pub fn checklist_category(category: ChecklistCategory) -> DisplayInfo {
    let (icon, color) = match category {
        ChecklistCategory::Documents => ("doc.text.fill", "blue"),
        ChecklistCategory::Health => ("cross.fill", "red"),
        ChecklistCategory::Packing => ("bag.fill", "green"),
        ChecklistCategory::Preparation => ("creditcard.fill", "orange"),
        ChecklistCategory::Activities => ("ticket.fill", "purple"),
    };
    DisplayInfo::new(category.as_str(), icon, color, "")
}

pub fn priority(priority: Priority) -> DisplayInfo {
    let color = match priority {
        Priority::High => "red",
        Priority::Medium => "orange",
        Priority::Low => "green",
    };
    DisplayInfo::new(priority.as_str(), "flag.fill", color, "")
}
