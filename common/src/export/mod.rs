//! Record-to-export transformation pipeline.
//!
//! Flattens stored submission records into human-readable rows for the
//! spreadsheet download. The transform is pure and order-preserving, and
//! it never fails: a malformed record degrades field by field to the "NA"
//! placeholder, and a flight lookup miss is logged and rendered as "NA"
//! detail cells rather than treated as an error.

use chrono::NaiveDateTime;
use log::warn;

use crate::model::draft::OTHER;
use crate::model::flight::{FlightOption, FlightSchedule, FlightTable, TravelClass, NO_LAYOVER};
use crate::model::record::SubmissionRecord;

/// Placeholder written wherever a record has no usable value.
pub const NA: &str = "NA";

/// Display value substituted for the [`NO_LAYOVER`] sentinel.
pub const DIRECT: &str = "Direct";

const DEPARTURE_DETAIL_LABELS: [&str; 7] = [
    "Departure Flight - Option",
    "Departure Flight - Date",
    "Departure Flight - Airline",
    "Departure Flight - Flight Number",
    "Departure Flight - Departure Time",
    "Departure Flight - Arrival Time",
    "Departure Flight - Layover",
];

const ARRIVAL_DETAIL_LABELS: [&str; 7] = [
    "Arrival Flight - Option",
    "Arrival Flight - Date",
    "Arrival Flight - Airline",
    "Arrival Flight - Flight Number",
    "Arrival Flight - Departure Time",
    "Arrival Flight - Arrival Time",
    "Arrival Flight - Layover",
];

/// One flattened row: column label to display string, in column order.
///
/// The flight-detail columns exist only on rows whose booking answer is
/// "Yes", so the label set varies per row; the spreadsheet writer unions
/// labels across rows in first-seen order to build a stable header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    fields: Vec<(&'static str, String)>,
}

impl ExportRow {
    fn push(&mut self, label: &'static str, value: String) {
        self.fields.push((label, value));
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(l, _)| *l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(l, v)| (*l, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Flattens `records` into export rows, preserving input order.
///
/// `class` picks the reference sub-table to search and `schedule` supplies
/// the static flight tables.
pub fn transform(
    records: &[SubmissionRecord],
    class: TravelClass,
    schedule: &FlightSchedule,
) -> Vec<ExportRow> {
    records
        .iter()
        .map(|record| transform_record(record, class, schedule))
        .collect()
}

fn transform_record(
    record: &SubmissionRecord,
    class: TravelClass,
    schedule: &FlightSchedule,
) -> ExportRow {
    let booked = text(&record.flight_booking) == "Yes";
    let departure_city = effective_city(booked, &record.departure_city, &record.departure_city_other);
    let arrival_city = effective_city(booked, &record.arrival_city, &record.arrival_city_other);
    // Flight lookups are attempted only when both legs have a usable city.
    let cities_known = !departure_city.is_empty() && !arrival_city.is_empty();

    let mut row = ExportRow::default();
    row.push("Sr No", na(&record.sr_no));
    row.push("Full Name", na(&record.full_name));
    row.push("Email", na(&record.email_id));
    row.push("Address", na(&record.address));
    row.push("Valid Visa", na(&record.valid_visa));
    row.push("Arranging Visa", placeholder_if_blank(visa_assistance(record)));
    row.push("Flight Booking", na(&record.flight_booking));
    row.push("Departure City", placeholder_if_blank(departure_city.clone()));
    if booked {
        let option = cities_known
            .then(|| resolve_option(&schedule.departures, class, &departure_city, &record.flight_option_departure))
            .flatten();
        push_flight_details(&mut row, &DEPARTURE_DETAIL_LABELS, option);
    }
    row.push("Arrival City", placeholder_if_blank(arrival_city.clone()));
    if booked {
        let option = cities_known
            .then(|| resolve_option(&schedule.arrivals, class, &arrival_city, &record.flight_option_arrival))
            .flatten();
        push_flight_details(&mut row, &ARRIVAL_DETAIL_LABELS, option);
    }
    row.push("Seat Preference", na(&record.seat_preference));
    row.push("Leisure Activity", na(&record.preference_leisure_activity));
    row.push("Meal Preference", placeholder_if_blank(effective_meal(record)));
    row.push("Food Allergies", na(&record.food_allergies));
    row.push("Submitted At", submitted_at(&record.created_at));
    row
}

/// Looks up a stored option id in one reference table. A missing city key
/// or unknown id is a lookup miss, not an error.
fn resolve_option<'a>(
    table: &'a FlightTable,
    class: TravelClass,
    city: &str,
    option_id: &Option<String>,
) -> Option<&'a FlightOption> {
    let id = option_id.as_deref().unwrap_or("").trim();
    if id.is_empty() {
        return None;
    }
    if table.options_for(class, city).is_none() {
        warn!("no {:?} flight options for city {:?}", class, city);
        return None;
    }
    table.find(class, city, id)
}

/// Emits the seven detail sub-columns for one leg: resolved values when
/// the lookup matched, "NA" across the board when it did not.
fn push_flight_details(row: &mut ExportRow, labels: &[&'static str; 7], option: Option<&FlightOption>) {
    match option {
        Some(flight) => {
            let layover = if flight.layover == NO_LAYOVER {
                DIRECT.to_string()
            } else {
                flight.layover.clone()
            };
            row.push(labels[0], flight.title.clone());
            row.push(labels[1], flight.date.clone());
            row.push(labels[2], flight.airline.clone());
            row.push(labels[3], flight.flight_number.clone());
            row.push(labels[4], flight.departure_time.clone());
            row.push(labels[5], flight.arrival_time.clone());
            row.push(labels[6], layover);
        }
        None => {
            for label in labels {
                row.push(label, NA.to_string());
            }
        }
    }
}

/// Blank unless a booking was requested; an "Other" selection falls back
/// to the free-text companion.
fn effective_city(booked: bool, city: &Option<String>, other: &Option<String>) -> String {
    if !booked {
        return String::new();
    }
    match text(city) {
        OTHER => text(other).to_string(),
        c => c.to_string(),
    }
}

/// A concrete meal preference wins; "Other" (or nothing) falls back to
/// the free-text companion.
fn effective_meal(record: &SubmissionRecord) -> String {
    match text(&record.meal_preference) {
        "" | OTHER => text(&record.meal_preference_other).to_string(),
        m => m.to_string(),
    }
}

/// The assistance answer is surfaced only for records without a visa.
fn visa_assistance(record: &SubmissionRecord) -> String {
    if text(&record.valid_visa) == "No" {
        text(&record.arranging_visa).to_string()
    } else {
        String::new()
    }
}

/// Locale-style date and time for the detail views and the export.
/// Unparseable input passes through raw; absence renders empty, not "NA".
pub fn submitted_at(created_at: &Option<String>) -> String {
    let raw = match created_at.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => return String::new(),
    };
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format("%A, %B %-d, %Y at %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// "NA" when the value is absent or blank.
fn na(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NA.to_string(),
    }
}

fn placeholder_if_blank(value: String) -> String {
    if value.trim().is_empty() {
        NA.to_string()
    } else {
        value
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::flight::FlightOption;

    fn option(id: &str, layover: &str) -> FlightOption {
        FlightOption {
            id: id.to_string(),
            title: format!("Option {}", id),
            date: "2025-12-10".to_string(),
            airline: "Air India".to_string(),
            flight_number: "AI 342".to_string(),
            departure_time: "07:45".to_string(),
            arrival_time: "16:10".to_string(),
            layover: layover.to_string(),
        }
    }

    fn schedule() -> FlightSchedule {
        let mut departures = FlightTable::default();
        departures
            .economy
            .insert("Mumbai".to_string(), vec![option("3", "NULL"), option("4", "2h 15m via Chennai")]);
        departures
            .business
            .insert("Mumbai".to_string(), vec![option("9", "NULL")]);
        let mut arrivals = FlightTable::default();
        arrivals
            .economy
            .insert("Delhi".to_string(), vec![option("7", "NULL")]);
        FlightSchedule { departures, arrivals }
    }

    fn booked_record() -> SubmissionRecord {
        SubmissionRecord {
            sr_no: Some("1".to_string()),
            full_name: Some("Asha Rao".to_string()),
            email_id: Some("asha@example.com".to_string()),
            address: Some("12 Marine Drive".to_string()),
            valid_visa: Some("Yes".to_string()),
            flight_booking: Some("Yes".to_string()),
            departure_city: Some("Mumbai".to_string()),
            arrival_city: Some("Delhi".to_string()),
            flight_option_departure: Some("3".to_string()),
            flight_option_arrival: Some("7".to_string()),
            seat_preference: Some("Window".to_string()),
            ..SubmissionRecord::default()
        }
    }

    #[test]
    fn output_order_matches_input_order() {
        let mut records = Vec::new();
        for name in ["first", "second", "third"] {
            records.push(SubmissionRecord {
                full_name: Some(name.to_string()),
                ..SubmissionRecord::default()
            });
        }

        let rows = transform(&records, TravelClass::Economy, &schedule());
        let names: Vec<_> = rows.iter().map(|r| r.get("Full Name").unwrap().to_string()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn no_booking_omits_flight_detail_columns() {
        let record = SubmissionRecord {
            flight_booking: Some("No".to_string()),
            departure_city: Some("Mumbai".to_string()),
            ..SubmissionRecord::default()
        };

        let rows = transform(&[record], TravelClass::Economy, &schedule());
        assert!(rows[0].labels().all(|l| !l.starts_with("Departure Flight")));
        assert!(rows[0].labels().all(|l| !l.starts_with("Arrival Flight")));
        // Cities are blanked too, then picked up by the placeholder rule.
        assert_eq!(rows[0].get("Departure City"), Some(NA));
    }

    #[test]
    fn null_layover_renders_as_direct() {
        let rows = transform(&[booked_record()], TravelClass::Economy, &schedule());
        assert_eq!(rows[0].get("Departure Flight - Layover"), Some(DIRECT));
        assert_eq!(rows[0].get("Departure Flight - Option"), Some("Option 3"));
        assert_eq!(rows[0].get("Arrival Flight - Layover"), Some(DIRECT));
    }

    #[test]
    fn unmatched_option_id_renders_all_na_details() {
        let mut record = booked_record();
        record.flight_option_departure = Some("99".to_string());

        let rows = transform(&[record], TravelClass::Economy, &schedule());
        for label in DEPARTURE_DETAIL_LABELS {
            assert_eq!(rows[0].get(label), Some(NA), "{}", label);
        }
        // The arrival leg still resolves.
        assert_eq!(rows[0].get("Arrival Flight - Option"), Some("Option 7"));
    }

    #[test]
    fn option_ids_compare_trimmed() {
        let mut record = booked_record();
        record.flight_option_departure = Some(" 3 ".to_string());

        let rows = transform(&[record], TravelClass::Economy, &schedule());
        assert_eq!(rows[0].get("Departure Flight - Option"), Some("Option 3"));
    }

    #[test]
    fn travel_class_selects_the_sub_table() {
        let mut record = booked_record();
        record.flight_option_departure = Some("9".to_string());

        let economy = transform(&[record.clone()], TravelClass::Economy, &schedule());
        assert_eq!(economy[0].get("Departure Flight - Option"), Some(NA));

        let business = transform(&[record], TravelClass::Business, &schedule());
        assert_eq!(business[0].get("Departure Flight - Option"), Some("Option 9"));
    }

    #[test]
    fn other_city_uses_the_free_text_fallback() {
        let mut record = booked_record();
        record.departure_city = Some("Other".to_string());
        record.departure_city_other = Some("Goa".to_string());

        let rows = transform(&[record], TravelClass::Economy, &schedule());
        assert_eq!(rows[0].get("Departure City"), Some("Goa"));
        // Goa has no reference entry, so the details miss.
        assert_eq!(rows[0].get("Departure Flight - Option"), Some(NA));
    }

    #[test]
    fn stale_other_text_is_ignored_under_a_concrete_city() {
        let mut record = booked_record();
        record.departure_city_other = Some("Goa".to_string());

        let rows = transform(&[record], TravelClass::Economy, &schedule());
        assert_eq!(rows[0].get("Departure City"), Some("Mumbai"));
    }

    #[test]
    fn visa_yes_hides_the_assistance_answer() {
        let mut record = booked_record();
        record.valid_visa = Some("Yes".to_string());
        record.arranging_visa = Some("Yes".to_string());

        let rows = transform(&[record.clone()], TravelClass::Economy, &schedule());
        assert_eq!(rows[0].get("Arranging Visa"), Some(NA));

        record.valid_visa = Some("No".to_string());
        let rows = transform(&[record], TravelClass::Economy, &schedule());
        assert_eq!(rows[0].get("Arranging Visa"), Some("Yes"));
    }

    #[test]
    fn meal_other_uses_the_free_text_fallback() {
        let mut record = booked_record();
        record.meal_preference = Some("Other".to_string());
        record.meal_preference_other = Some("Keto".to_string());

        let rows = transform(&[record], TravelClass::Economy, &schedule());
        assert_eq!(rows[0].get("Meal Preference"), Some("Keto"));
    }

    #[test]
    fn empty_record_degrades_to_placeholders() {
        let rows = transform(&[SubmissionRecord::default()], TravelClass::Economy, &schedule());
        let row = &rows[0];

        assert_eq!(row.get("Full Name"), Some(NA));
        assert_eq!(row.get("Departure City"), Some(NA));
        assert_eq!(row.get("Meal Preference"), Some(NA));
        // Rule 6: an absent timestamp renders empty, not "NA".
        assert_eq!(row.get("Submitted At"), Some(""));
        assert!(row.labels().all(|l| !l.starts_with("Departure Flight")));
    }

    #[test]
    fn timestamps_format_parse_or_pass_through() {
        assert_eq!(
            submitted_at(&Some("2025-12-10 15:05:00".to_string())),
            "Wednesday, December 10, 2025 at 3:05 PM"
        );
        assert_eq!(
            submitted_at(&Some("2025-12-10T15:05:00Z".to_string())),
            "Wednesday, December 10, 2025 at 3:05 PM"
        );
        assert_eq!(submitted_at(&Some("last tuesday".to_string())), "last tuesday");
        assert_eq!(submitted_at(&None), "");
        assert_eq!(submitted_at(&Some("  ".to_string())), "");
    }
}
