use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WizardProps {
    /// Invoked after the collector has accepted the submission.
    pub on_finished: Callback<()>,
}
