//! Static flight reference data.
//!
//! Two read-only tables (onward and return flights) keyed by travel class
//! and then by city. Bundled as JSON with the crate, parsed once at
//! startup, and injected wherever a lookup happens so tests can substitute
//! their own tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sentinel in the reference data meaning a direct flight.
pub const NO_LAYOVER: &str = "NULL";

/// Selects which reference sub-table to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelClass {
    Economy,
    Business,
}

/// One offered flight, as stored in the reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOption {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Airline")]
    pub airline: String,
    #[serde(rename = "Flight_Number")]
    pub flight_number: String,
    #[serde(rename = "Departure_Time")]
    pub departure_time: String,
    #[serde(rename = "Arrival_Time")]
    pub arrival_time: String,
    /// Human-readable layover description, or [`NO_LAYOVER`] for direct.
    #[serde(rename = "Layover")]
    pub layover: String,
}

/// One reference table: travel class, then city, then offered options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTable {
    #[serde(rename = "Economy", default)]
    pub economy: HashMap<String, Vec<FlightOption>>,
    #[serde(rename = "Business", default)]
    pub business: HashMap<String, Vec<FlightOption>>,
}

impl FlightTable {
    /// Options offered for `city` under `class`, or `None` when the city
    /// has no entry in that sub-table.
    pub fn options_for(&self, class: TravelClass, city: &str) -> Option<&[FlightOption]> {
        let by_city = match class {
            TravelClass::Economy => &self.economy,
            TravelClass::Business => &self.business,
        };
        by_city.get(city).map(Vec::as_slice)
    }

    /// Resolves a stored option id within a city's list. Ids are compared
    /// as trimmed strings; the store sometimes pads them.
    pub fn find(&self, class: TravelClass, city: &str, option_id: &str) -> Option<&FlightOption> {
        let wanted = option_id.trim();
        if wanted.is_empty() {
            return None;
        }
        self.options_for(class, city)?
            .iter()
            .find(|option| option.id.trim() == wanted)
    }
}

/// The full reference data set: onward (departure) and return (arrival)
/// tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightSchedule {
    pub departures: FlightTable,
    pub arrivals: FlightTable,
}

impl FlightSchedule {
    /// Parses the JSON tables bundled with the crate.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Ok(Self {
            departures: serde_json::from_str(include_str!("../../data/departure.json"))?,
            arrivals: serde_json::from_str(include_str!("../../data/arrival.json"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tables_parse() {
        let schedule = FlightSchedule::bundled().unwrap();
        assert!(!schedule.departures.economy.is_empty());
        assert!(!schedule.arrivals.economy.is_empty());
        assert!(!schedule.departures.business.is_empty());
    }

    #[test]
    fn find_matches_trimmed_ids() {
        let schedule = FlightSchedule::bundled().unwrap();
        let direct = schedule.departures.find(TravelClass::Economy, "Mumbai", " 1 ");
        assert!(direct.is_some());
        assert_eq!(direct.unwrap().id, "1");
    }

    #[test]
    fn unknown_city_or_id_is_none() {
        let schedule = FlightSchedule::bundled().unwrap();
        assert!(schedule.departures.find(TravelClass::Economy, "Atlantis", "1").is_none());
        assert!(schedule.departures.find(TravelClass::Economy, "Mumbai", "999").is_none());
        assert!(schedule.departures.find(TravelClass::Economy, "Mumbai", "").is_none());
    }
}
