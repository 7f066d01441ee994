//! Normalized geocoded place
//!
//! A `Place` is what the suggestion endpoint returns for each candidate
//! and what the history store persists once the user picks one.

use serde::{Deserialize, Serialize};

/// A geocoded location with coordinates and timezone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl Place {
    /// Display label used for the query text after a pick
    ///
    /// Formats as `city, region, country`, dropping the region when it is
    /// missing or blank.
    pub fn label(&self) -> String {
        match self.region() {
            Some(region) => format!("{}, {}, {}", self.city, region, self.country),
            None => format!("{}, {}", self.city, self.country),
        }
    }

    /// Region, if present and not blank
    pub fn region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty())
    }

    /// Coordinates formatted with hemisphere suffixes, e.g. `48.8566°N, 2.3522°E`
    pub fn coordinates(&self) -> String {
        let lat_hemisphere = if self.latitude < 0.0 { 'S' } else { 'N' };
        let lon_hemisphere = if self.longitude < 0.0 { 'W' } else { 'E' };
        format!(
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            lat_hemisphere,
            self.longitude.abs(),
            lon_hemisphere
        )
    }
}

#[cfg(test)]
#[path = "place_tests.rs"]
mod place_tests;
