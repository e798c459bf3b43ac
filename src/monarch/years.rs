use crate::error::{KingsError, KingsResult};
use chrono::{Datelike, Local};

/// Parse a reign such as `"1066"`, `"1066-1087"` or `"1952-"` into `(start, end)`.
/// An open range ends in `current_year`.
pub fn parse_years(years: &str, current_year: i32) -> KingsResult<(i32, i32)> {
    match years.split_once('-') {
        None => {
            let year = parse_year(years, years)?;
            Ok((year, year))
        }
        Some((start, end)) => {
            let start = parse_year(years, start)?;
            let end = if end.is_empty() {
                current_year
            } else {
                parse_year(years, end)?
            };
            Ok((start, end))
        }
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

fn parse_year(whole: &str, part: &str) -> KingsResult<i32> {
    part.trim()
        .parse::<i32>()
        .map_err(|e| KingsError::InvalidYears {
            value: whole.to_string(),
            reason: format!("{:?}: {}", part, e),
        })
}
