//! Component state for the registration wizard.

use common::wizard::Wizard;

/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct WizardComponent {
    /// Page position and draft, with all gating logic.
    pub wizard: Wizard,

    /// Guard against overlapping submissions; also disables the button.
    pub submitting: bool,
}

impl WizardComponent {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(),
            submitting: false,
        }
    }
}
