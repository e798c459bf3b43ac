// src/monarch/types.rs

use super::years::parse_years;
use crate::error::KingsResult;
use serde::Deserialize;

/// One entry as it comes over the wire.
#[derive(Debug, Deserialize, PartialEq, Clone, Eq)]
pub struct RawRecord {
    pub id: i32,
    #[serde(rename = "nm")]
    pub name: String,
    #[serde(rename = "cty")]
    pub city: String,
    #[serde(rename = "hse")]
    pub house: String,
    #[serde(rename = "yrs")]
    pub years: String,
}

/// A monarch with the reign resolved to concrete years.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Monarch {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub house: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl Monarch {
    pub fn from_raw(raw: RawRecord, current_year: i32) -> KingsResult<Self> {
        let (start_year, end_year) = parse_years(&raw.years, current_year)?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            city: raw.city,
            house: raw.house,
            start_year,
            end_year,
        })
    }

    pub fn reign_length(&self) -> i64 {
        i64::from(self.end_year) - i64::from(self.start_year)
    }

    /// Text before the first space, or the whole name.
    pub fn first_name(&self) -> &str {
        self.name
            .split_once(' ')
            .map_or(self.name.as_str(), |(first, _)| first)
    }
}
