//! Travel records owned by a profile
//!
//! All records serialize with camelCase field names and enums serialize as
//! their display names ("Food & Drink", "Solo", "High"), which is the layout
//! of the persisted `profile` blob.

mod checklist;
mod place;
mod profile;
mod trip;

pub use checklist::{ChecklistCategory, ChecklistItem, Priority};
pub use place::{Coordinate, Place, MAX_RATING, MIN_RATING};
pub use profile::{Profile, ProfileStats, TravelInterest, TravelStyle};
pub use trip::{Trip, TripType};

/// Parse an enum from its display name, ignoring case, punctuation and the
/// standalone word "and"
///
/// `"Food & Drink"`, `"food-and-drink"` and `"food_drink"` all normalize to
/// the same key.
pub(crate) fn normalize_label(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| *word != "and")
        .collect()
}

/// Resolve `input` against `(label, value)` pairs using [`normalize_label`]
pub(crate) fn parse_label<T: Copy>(
    context: &str,
    input: &str,
    variants: &[T],
    label: impl Fn(T) -> &'static str,
) -> crate::error::Result<T> {
    let wanted = normalize_label(input);
    variants
        .iter()
        .copied()
        .find(|v| normalize_label(label(*v)) == wanted)
        .ok_or_else(|| {
            let supported: Vec<&str> = variants.iter().map(|v| label(*v)).collect();
            crate::error::MapdError::invalid_value(
                context,
                format!("{} (supported: {})", input, supported.join(", ")),
            )
        })
}
