//! Number formatting for report tables

use contracts::shared::format::group_thousands;

/// US dollar amount with cents: 5000.0 -> "$5,000.00", -12.5 -> "-$12.50"
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100, ','), cents % 100)
}

/// Resolution time given in minutes: "30 min", "2 hours", "1 h 35 min"
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as u64;
    let (hours, rest) = (total / 60, total % 60);
    match (hours, rest) {
        (0, m) => format!("{} min", m),
        (1, 0) => "1 hour".to_string(),
        (h, 0) => format!("{} hours", h),
        (h, m) => format!("{} h {} min", h, m),
    }
}
