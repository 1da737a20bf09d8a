//! Three-page registration wizard state machine.
//!
//! Owns the in-progress draft across the Personal, Travel, and Extras
//! pages, gates forward navigation on per-page completeness predicates,
//! and finalizes the draft into a wire payload. The predicates are pure
//! functions of the draft and are re-evaluated on every render; a gated
//! `next` or `submit` is a silent no-op, surfaced in the UI only as a
//! disabled control.

use crate::model::draft::{SubmissionDraft, OTHER};
use crate::model::record::SubmissionPayload;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardPage {
    #[default]
    Personal,
    Travel,
    Extras,
}

impl WizardPage {
    /// 1-based position, for the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardPage::Personal => 1,
            WizardPage::Travel => 2,
            WizardPage::Extras => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardPage::Personal => "Personal",
            WizardPage::Travel => "Travel",
            WizardPage::Extras => "Extras",
        }
    }

    pub const ALL: [WizardPage; 3] = [WizardPage::Personal, WizardPage::Travel, WizardPage::Extras];
}

/// The wizard session: current page plus the draft it owns.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    page: WizardPage,
    pub draft: SubmissionDraft,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> WizardPage {
        self.page
    }

    /// Advances one page if the current page's predicate passes. Returns
    /// whether the page changed.
    pub fn next(&mut self) -> bool {
        let target = match self.page {
            WizardPage::Personal if personal_complete(&self.draft) => WizardPage::Travel,
            WizardPage::Travel if travel_complete(&self.draft) => WizardPage::Extras,
            _ => return false,
        };
        self.page = target;
        true
    }

    /// Steps back one page; a no-op on the first page.
    pub fn previous(&mut self) -> bool {
        let target = match self.page {
            WizardPage::Personal => return false,
            WizardPage::Travel => WizardPage::Personal,
            WizardPage::Extras => WizardPage::Travel,
        };
        self.page = target;
        true
    }

    /// Whether Next is available from the current page.
    pub fn can_advance(&self) -> bool {
        match self.page {
            WizardPage::Personal => personal_complete(&self.draft),
            WizardPage::Travel => travel_complete(&self.draft),
            WizardPage::Extras => false,
        }
    }

    /// Submit is offered only on the last page with its predicate passing.
    pub fn can_submit(&self) -> bool {
        self.page == WizardPage::Extras && extras_complete(&self.draft)
    }

    /// Finalizes the draft into the canonical wire payload, or `None`
    /// unless submission is currently allowed.
    pub fn payload(&self) -> Option<SubmissionPayload> {
        self.can_submit().then(|| SubmissionPayload::from(&self.draft))
    }
}

/// Page 1: name, address, and the visa answer are required; answering
/// "No" to the visa question additionally requires the assistance answer.
pub fn personal_complete(draft: &SubmissionDraft) -> bool {
    if draft.full_name.is_empty() || draft.address.is_empty() {
        return false;
    }
    match draft.has_visa.as_str() {
        "Yes" => true,
        "No" => matches!(draft.needs_visa_assistance.as_str(), "Yes" | "No"),
        _ => false,
    }
}

/// Page 2: the booking answer is required; "Yes" requires both cities,
/// with non-blank free text standing in for an "Other" selection.
pub fn travel_complete(draft: &SubmissionDraft) -> bool {
    match draft.needs_flight_booking.as_str() {
        "No" => true,
        "Yes" => {
            selection_complete(&draft.departure_city, &draft.departure_city_other)
                && selection_complete(&draft.arrival_city, &draft.arrival_city_other)
        }
        _ => false,
    }
}

/// Page 3: only the meal "Other" pairing is gated. An empty meal
/// preference is allowed, and the leisure activity field is deliberately
/// not enforced.
pub fn extras_complete(draft: &SubmissionDraft) -> bool {
    draft.meal_preference.is_empty()
        || selection_complete(&draft.meal_preference, &draft.meal_preference_other)
}

/// Completeness rule shared by the selector/"Other" pairs: a concrete
/// selection stands on its own; "Other" needs non-blank free text.
pub fn selection_complete(selection: &str, other: &str) -> bool {
    !selection.is_empty() && (selection != OTHER || !other.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::draft::DraftField;

    fn personal_draft() -> SubmissionDraft {
        let mut draft = SubmissionDraft::default();
        draft.set(DraftField::FullName, "Asha Rao".to_string());
        draft.set(DraftField::Address, "12 Marine Drive, Mumbai".to_string());
        draft.set(DraftField::HasVisa, "Yes".to_string());
        draft
    }

    #[test]
    fn blank_name_or_address_blocks_page_one() {
        let mut draft = personal_draft();
        draft.full_name.clear();
        assert!(!personal_complete(&draft));

        let mut draft = personal_draft();
        draft.address.clear();
        assert!(!personal_complete(&draft));
    }

    #[test]
    fn visa_answer_must_be_yes_or_no() {
        let mut draft = personal_draft();
        draft.has_visa.clear();
        assert!(!personal_complete(&draft));
        draft.has_visa = "Maybe".to_string();
        assert!(!personal_complete(&draft));
    }

    #[test]
    fn no_visa_requires_an_assistance_answer() {
        let mut draft = personal_draft();
        draft.set(DraftField::HasVisa, "No".to_string());
        assert!(!personal_complete(&draft));

        draft.set(DraftField::NeedsVisaAssistance, "Yes".to_string());
        assert!(personal_complete(&draft));

        draft.set(DraftField::NeedsVisaAssistance, "No".to_string());
        assert!(personal_complete(&draft));
    }

    #[test]
    fn booking_no_completes_travel_page() {
        let mut draft = SubmissionDraft::default();
        draft.set(DraftField::NeedsFlightBooking, "No".to_string());
        assert!(travel_complete(&draft));
    }

    #[test]
    fn booking_yes_requires_both_cities() {
        let mut draft = SubmissionDraft::default();
        draft.set(DraftField::NeedsFlightBooking, "Yes".to_string());
        assert!(!travel_complete(&draft));

        draft.set(DraftField::DepartureCity, "Mumbai".to_string());
        assert!(!travel_complete(&draft));

        draft.set(DraftField::ArrivalCity, "Delhi".to_string());
        assert!(travel_complete(&draft));
    }

    #[test]
    fn other_city_requires_non_blank_text() {
        let mut draft = SubmissionDraft::default();
        draft.set(DraftField::NeedsFlightBooking, "Yes".to_string());
        draft.set(DraftField::DepartureCity, "Other".to_string());
        draft.set(DraftField::ArrivalCity, "Delhi".to_string());
        assert!(!travel_complete(&draft));

        draft.set(DraftField::DepartureCityOther, "   ".to_string());
        assert!(!travel_complete(&draft));

        draft.set(DraftField::DepartureCityOther, "Goa".to_string());
        assert!(travel_complete(&draft));
    }

    #[test]
    fn meal_other_requires_text_on_extras_page() {
        let mut draft = SubmissionDraft::default();
        assert!(extras_complete(&draft));

        draft.set(DraftField::MealPreference, "Other".to_string());
        assert!(!extras_complete(&draft));

        draft.set(DraftField::MealPreferenceOther, "Keto".to_string());
        assert!(extras_complete(&draft));
    }

    #[test]
    fn next_is_gated_by_the_current_page() {
        let mut wizard = Wizard::new();
        assert!(!wizard.next());
        assert_eq!(wizard.page(), WizardPage::Personal);

        wizard.draft = personal_draft();
        assert!(wizard.next());
        assert_eq!(wizard.page(), WizardPage::Travel);

        // Travel incomplete: still a no-op.
        assert!(!wizard.next());
        assert_eq!(wizard.page(), WizardPage::Travel);

        wizard.draft.set(DraftField::NeedsFlightBooking, "No".to_string());
        assert!(wizard.next());
        assert_eq!(wizard.page(), WizardPage::Extras);

        // Already at the last page.
        assert!(!wizard.next());
        assert_eq!(wizard.page(), WizardPage::Extras);
    }

    #[test]
    fn previous_stops_at_the_first_page() {
        let mut wizard = Wizard::new();
        assert!(!wizard.previous());

        wizard.draft = personal_draft();
        wizard.next();
        assert!(wizard.previous());
        assert_eq!(wizard.page(), WizardPage::Personal);
    }

    #[test]
    fn submit_only_from_the_last_page() {
        let mut wizard = Wizard::new();
        wizard.draft = personal_draft();
        assert!(!wizard.can_submit());
        assert!(wizard.payload().is_none());

        wizard.next();
        wizard.draft.set(DraftField::NeedsFlightBooking, "No".to_string());
        wizard.next();
        assert!(wizard.can_submit());

        wizard.draft.set(DraftField::MealPreference, "Other".to_string());
        assert!(!wizard.can_submit());
        assert!(wizard.payload().is_none());

        wizard.draft.set(DraftField::MealPreferenceOther, "Keto".to_string());
        let payload = wizard.payload().expect("submit allowed");
        assert_eq!(payload.full_name, "Asha Rao");
        assert_eq!(payload.flight_booking, "No");
    }
}
