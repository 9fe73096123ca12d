//! Formatting helpers for presenting the report.

use time::macros::format_description;
use time::Date;

/// Capitalize a network name for card headers ("cosmoshub" → "Cosmoshub").
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Compact day/month badge used in the header strip ("7/Aug").
pub fn day_month(date: Date) -> String {
    date.format(&format_description!(
        "[day padding:none]/[month repr:short]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

/// Value attribute for the date inputs.
pub fn iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Parse a date input value back into a `Date`.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw, &format_description!("[year]-[month]-[day]")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize("cosmoshub"), "Cosmoshub");
        assert_eq!(capitalize("Osmosis"), "Osmosis");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn day_month_has_no_day_padding() {
        assert_eq!(day_month(date!(2023 - 08 - 07)), "7/Aug");
        assert_eq!(day_month(date!(2023 - 12 - 25)), "25/Dec");
    }

    #[test]
    fn iso_date_round_trips_through_the_input_format() {
        let day = date!(2024 - 02 - 29);
        assert_eq!(iso_date(day), "2024-02-29");
        assert_eq!(parse_iso_date(&iso_date(day)), Some(day));
    }

    #[test]
    fn garbage_input_values_parse_to_none() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2024-13-01"), None);
        assert_eq!(parse_iso_date("yesterday"), None);
    }
}
