//! In-progress wizard form state.
//!
//! A `SubmissionDraft` is created empty when the wizard starts, mutated by
//! field-edit events, and either discarded when the user navigates away or
//! finalized into a wire payload on submit. Three selector fields pair with
//! an "Other" free-text input (departure city, arrival city, meal
//! preference); all three share one clearing rule so a stale "Other" text
//! can never ride along under a concrete selection.

/// Selector value that switches the paired free-text input on.
pub const OTHER: &str = "Other";

/// City choices offered by the travel page selectors.
pub const CITIES: [&str; 9] = [
    "Ahmedabad",
    "Bangalore",
    "Chennai",
    "Delhi",
    "Hyderabad",
    "Kolkata",
    "Mumbai",
    "Pune",
    OTHER,
];

pub const SEAT_OPTIONS: [&str; 3] = ["Window", "Aisle", "Either"];

pub const MEAL_OPTIONS: [&str; 4] = ["Vegetarian", "Non-Vegetarian", "Jain", OTHER];

/// The registration form as the user has filled it in so far.
///
/// Yes/No questions hold `"Yes"`, `"No"`, or `""` for unanswered; the
/// selector fields hold one of their option lists or `""`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub has_visa: String,
    /// Meaningful only when `has_visa` is "No".
    pub needs_visa_assistance: String,
    pub needs_flight_booking: String,
    pub departure_city: String,
    pub departure_city_other: String,
    pub arrival_city: String,
    pub arrival_city_other: String,
    pub seat_preference: String,
    pub leisure_activity: String,
    pub meal_preference: String,
    pub meal_preference_other: String,
    pub food_allergies: String,
}

/// Identifies one editable field of the draft. The wizard view sends these
/// alongside the new value rather than mutating fields directly, so the
/// paired-selector clearing rule has a single enforcement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FullName,
    Email,
    Address,
    HasVisa,
    NeedsVisaAssistance,
    NeedsFlightBooking,
    DepartureCity,
    DepartureCityOther,
    ArrivalCity,
    ArrivalCityOther,
    SeatPreference,
    LeisureActivity,
    MealPreference,
    MealPreferenceOther,
    FoodAllergies,
}

impl SubmissionDraft {
    /// Applies a single field edit. Selector fields that pair with an
    /// "Other" free-text input go through [`set_paired`].
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Email => self.email = value,
            DraftField::Address => self.address = value,
            DraftField::HasVisa => self.has_visa = value,
            DraftField::NeedsVisaAssistance => self.needs_visa_assistance = value,
            DraftField::NeedsFlightBooking => self.needs_flight_booking = value,
            DraftField::DepartureCity => {
                set_paired(&mut self.departure_city, &mut self.departure_city_other, value)
            }
            DraftField::DepartureCityOther => self.departure_city_other = value,
            DraftField::ArrivalCity => {
                set_paired(&mut self.arrival_city, &mut self.arrival_city_other, value)
            }
            DraftField::ArrivalCityOther => self.arrival_city_other = value,
            DraftField::SeatPreference => self.seat_preference = value,
            DraftField::LeisureActivity => self.leisure_activity = value,
            DraftField::MealPreference => {
                set_paired(&mut self.meal_preference, &mut self.meal_preference_other, value)
            }
            DraftField::MealPreferenceOther => self.meal_preference_other = value,
            DraftField::FoodAllergies => self.food_allergies = value,
        }
    }
}

/// Clearing rule shared by the three selector/"Other" pairs: picking
/// anything but "Other" wipes the free-text companion.
fn set_paired(selector: &mut String, other: &mut String, value: String) {
    if value != OTHER {
        other.clear();
    }
    *selector = value;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_a_city_clears_the_other_text() {
        let mut draft = SubmissionDraft::default();
        draft.set(DraftField::DepartureCity, OTHER.to_string());
        draft.set(DraftField::DepartureCityOther, "Goa".to_string());
        draft.set(DraftField::DepartureCity, "Mumbai".to_string());

        assert_eq!(draft.departure_city, "Mumbai");
        assert_eq!(draft.departure_city_other, "");
    }

    #[test]
    fn clearing_applies_to_all_three_pairs() {
        let mut draft = SubmissionDraft::default();

        draft.set(DraftField::ArrivalCity, OTHER.to_string());
        draft.set(DraftField::ArrivalCityOther, "Kochi".to_string());
        draft.set(DraftField::ArrivalCity, "Delhi".to_string());
        assert_eq!(draft.arrival_city_other, "");

        draft.set(DraftField::MealPreference, OTHER.to_string());
        draft.set(DraftField::MealPreferenceOther, "Keto".to_string());
        draft.set(DraftField::MealPreference, "Jain".to_string());
        assert_eq!(draft.meal_preference_other, "");
    }

    #[test]
    fn reselecting_other_keeps_the_typed_text() {
        let mut draft = SubmissionDraft::default();
        draft.set(DraftField::MealPreference, OTHER.to_string());
        draft.set(DraftField::MealPreferenceOther, "Keto".to_string());
        draft.set(DraftField::MealPreference, OTHER.to_string());

        assert_eq!(draft.meal_preference_other, "Keto");
    }

    #[test]
    fn plain_fields_pass_through() {
        let mut draft = SubmissionDraft::default();
        draft.set(DraftField::FullName, "Asha Rao".to_string());
        draft.set(DraftField::SeatPreference, "Window".to_string());

        assert_eq!(draft.full_name, "Asha Rao");
        assert_eq!(draft.seat_preference, "Window");
    }
}
