//! Wire shapes for submitted registrations.
//!
//! `SubmissionPayload` is what the client posts: the draft's fields mapped
//! onto the collector's canonical column names. `SubmissionRecord` is the
//! server-of-record shape read back for the dashboard and export; every
//! field is optional and leniently typed because the backing store is not
//! strict about column presence or types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::draft::SubmissionDraft;

/// Finalized submission, keyed by the collector's canonical field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    #[serde(rename = "Full_Name")]
    pub full_name: String,
    #[serde(rename = "Email_ID")]
    pub email_id: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Valid_Visa")]
    pub valid_visa: String,
    #[serde(rename = "Arranging_Visa")]
    pub arranging_visa: String,
    #[serde(rename = "Flight_Booking")]
    pub flight_booking: String,
    #[serde(rename = "Departure_City")]
    pub departure_city: String,
    #[serde(rename = "Departure_City_Other")]
    pub departure_city_other: String,
    #[serde(rename = "Arrival_City")]
    pub arrival_city: String,
    #[serde(rename = "Arrival_City_Other")]
    pub arrival_city_other: String,
    #[serde(rename = "Seat_Preference")]
    pub seat_preference: String,
    /// Assigned later by the travel desk; always blank at submit time.
    #[serde(rename = "Flight_Option_Departure")]
    pub flight_option_departure: String,
    #[serde(rename = "Flight_Option_Arrival")]
    pub flight_option_arrival: String,
    #[serde(rename = "Preference_Leisure_Activity")]
    pub preference_leisure_activity: String,
    #[serde(rename = "Meal_Preference")]
    pub meal_preference: String,
    #[serde(rename = "Meal_Preference_Other")]
    pub meal_preference_other: String,
    #[serde(rename = "Food_Allergies")]
    pub food_allergies: String,
}

impl From<&SubmissionDraft> for SubmissionPayload {
    fn from(draft: &SubmissionDraft) -> Self {
        Self {
            full_name: draft.full_name.clone(),
            email_id: draft.email.clone(),
            address: draft.address.clone(),
            valid_visa: draft.has_visa.clone(),
            arranging_visa: draft.needs_visa_assistance.clone(),
            flight_booking: draft.needs_flight_booking.clone(),
            departure_city: draft.departure_city.clone(),
            departure_city_other: draft.departure_city_other.clone(),
            arrival_city: draft.arrival_city.clone(),
            arrival_city_other: draft.arrival_city_other.clone(),
            seat_preference: draft.seat_preference.clone(),
            flight_option_departure: String::new(),
            flight_option_arrival: String::new(),
            preference_leisure_activity: draft.leisure_activity.clone(),
            meal_preference: draft.meal_preference.clone(),
            meal_preference_other: draft.meal_preference_other.clone(),
            food_allergies: draft.food_allergies.clone(),
        }
    }
}

/// A persisted submission as returned by the fetch collaborator.
/// Read-only on the client; never mutated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "SR_NO", default, deserialize_with = "lenient_string")]
    pub sr_no: Option<String>,
    #[serde(rename = "Full_Name", default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(rename = "Email_ID", default, deserialize_with = "lenient_string")]
    pub email_id: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(rename = "Valid_Visa", default, deserialize_with = "lenient_string")]
    pub valid_visa: Option<String>,
    #[serde(rename = "Arranging_Visa", default, deserialize_with = "lenient_string")]
    pub arranging_visa: Option<String>,
    #[serde(rename = "Flight_Booking", default, deserialize_with = "lenient_string")]
    pub flight_booking: Option<String>,
    #[serde(rename = "Departure_City", default, deserialize_with = "lenient_string")]
    pub departure_city: Option<String>,
    #[serde(rename = "Departure_City_Other", default, deserialize_with = "lenient_string")]
    pub departure_city_other: Option<String>,
    #[serde(rename = "Arrival_City", default, deserialize_with = "lenient_string")]
    pub arrival_city: Option<String>,
    #[serde(rename = "Arrival_City_Other", default, deserialize_with = "lenient_string")]
    pub arrival_city_other: Option<String>,
    #[serde(rename = "Seat_Preference", default, deserialize_with = "lenient_string")]
    pub seat_preference: Option<String>,
    #[serde(rename = "Flight_Option_Departure", default, deserialize_with = "lenient_string")]
    pub flight_option_departure: Option<String>,
    #[serde(rename = "Flight_Option_Arrival", default, deserialize_with = "lenient_string")]
    pub flight_option_arrival: Option<String>,
    #[serde(
        rename = "Preference_Leisure_Activity",
        default,
        deserialize_with = "lenient_string"
    )]
    pub preference_leisure_activity: Option<String>,
    #[serde(rename = "Meal_Preference", default, deserialize_with = "lenient_string")]
    pub meal_preference: Option<String>,
    #[serde(rename = "Meal_Preference_Other", default, deserialize_with = "lenient_string")]
    pub meal_preference_other: Option<String>,
    #[serde(rename = "Food_Allergies", default, deserialize_with = "lenient_string")]
    pub food_allergies: Option<String>,
    #[serde(rename = "Created_At", default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
}

/// Accepts strings, numbers, or booleans where a string is expected.
/// `SR_NO` in particular comes back as a bare number.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
