//! Three-page registration form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, and view
//! rendering. Navigation and submission gating live in `common::wizard`;
//! this component only renders the current page and forwards edits.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WizardProps;
pub use state::WizardComponent;

impl Component for WizardComponent {
    type Message = Msg;
    type Properties = WizardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WizardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
