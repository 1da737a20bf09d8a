//! Confirmation page shown after a successful submission.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SubmittedProps {
    pub on_again: Callback<()>,
}

pub struct SubmittedPage;

impl Component for SubmittedPage {
    type Message = ();
    type Properties = SubmittedProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="submitted">
                <h1>{"Thank you!"}</h1>
                <p>{"Your registration has been recorded."}</p>
                <button
                    class="primary-btn"
                    onclick={ctx.props().on_again.reform(|_| ())}
                >
                    {"Submit Another Response"}
                </button>
            </div>
        }
    }
}
