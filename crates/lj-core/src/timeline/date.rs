use chrono::{DateTime, Datelike, NaiveDate};

use crate::journey::MEMORY_DATE_FORMAT;

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parses a memory date in any format the backend or the form produces:
/// RFC 3339 (UTC date taken), `YYYY-MM-DD` or `dd/MM/yyyy`.
pub fn parse_memory_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, MEMORY_DATE_FORMAT))
        .ok()
}

/// "14 de fevereiro de 2021". Falls back to the raw input when unparseable.
pub fn format_long_date(raw: &str) -> String {
    match parse_memory_date(raw) {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS_PT[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_portuguese_date() {
        assert_eq!(format_long_date("2021-02-14"), "14 de fevereiro de 2021");
        assert_eq!(format_long_date("01/03/2020"), "1 de março de 2020");
    }

    #[test]
    fn rfc3339_dates_use_utc_day() {
        assert_eq!(
            parse_memory_date("2022-12-31T23:30:00-03:00"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn unparseable_date_is_returned_verbatim() {
        assert_eq!(format_long_date("ontem"), "ontem");
    }
}
