//! Component state for the registrations dashboard.

use gloo_console::error;

use common::model::flight::FlightSchedule;
use common::model::record::SubmissionRecord;

/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct DashboardComponent {
    /// Stored registrations, in the collector's order.
    pub records: Vec<SubmissionRecord>,

    /// Whether a list fetch is in flight.
    pub loading: bool,

    /// Bundled flight reference tables used for the detail view and export.
    pub schedule: FlightSchedule,

    /// Record shown in the detail modal, once its fetch completes.
    pub selected: Option<SubmissionRecord>,

    pub modal_open: bool,
    pub modal_loading: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        let schedule = match FlightSchedule::bundled() {
            Ok(schedule) => schedule,
            Err(err) => {
                error!(format!("flight reference data failed to parse: {}", err));
                FlightSchedule::default()
            }
        };
        Self {
            records: Vec::new(),
            loading: false,
            schedule,
            selected: None,
            modal_open: false,
            modal_loading: false,
            loaded: false,
        }
    }
}
