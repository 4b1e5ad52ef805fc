use chrono::NaiveTime;

const DISPLAY_FORMATS: [&str; 4] = ["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S"];

/// Parses appointment display times such as "9:00 AM", "1:30 PM" or "14:00".
pub fn parse_display_time(value: &str) -> Option<NaiveTime> {
    let normalized = value.trim().to_uppercase();
    if normalized.is_empty() {
        return None;
    }

    DISPLAY_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
}
