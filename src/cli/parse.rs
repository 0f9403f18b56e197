use chrono::{DateTime, NaiveDate, Utc};

use mapd_core::id::RecordId;
use mapd_core::model::{TravelInterest, TravelStyle, TripType};

/// Parse travel style from its display name ("Food & Drink", "food-and-drink")
pub fn parse_travel_style(s: &str) -> std::result::Result<TravelStyle, String> {
    s.parse::<TravelStyle>().map_err(|e| e.to_string())
}

/// Parse a travel interest from its display name
pub fn parse_interest(s: &str) -> std::result::Result<TravelInterest, String> {
    s.parse::<TravelInterest>().map_err(|e| e.to_string())
}

/// Parse trip type from its display name
pub fn parse_trip_type(s: &str) -> std::result::Result<TripType, String> {
    s.parse::<TripType>().map_err(|e| e.to_string())
}

/// Parse a record id, normalizing case
pub fn parse_record_id(s: &str) -> std::result::Result<RecordId, String> {
    s.parse::<RecordId>().map_err(|e| e.to_string())
}

/// Parse a date as `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp
pub fn parse_date(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected YYYY-MM-DD or RFC 3339 date, got '{}': {}", s, e))
}
