//! Landing page with the entry button. Starting shows a short "getting
//! ready" state before handing off to the wizard.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LandingProps {
    pub on_start: Callback<()>,
}

pub enum Msg {
    Start,
    Go,
}

pub struct LandingPage {
    starting: bool,
}

impl Component for LandingPage {
    type Message = Msg;
    type Properties = LandingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { starting: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                if self.starting {
                    return false;
                }
                self.starting = true;
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(1000).await;
                    link.send_message(Msg::Go);
                });
                true
            }
            Msg::Go => {
                ctx.props().on_start.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let label = if self.starting {
            "Getting Started ..."
        } else {
            "Get Started"
        };
        html! {
            <div class="landing">
                <h1>{"Travel & Visa Registration"}</h1>
                <p>{"Register your travel details, visa status, and preferences for the upcoming trip."}</p>
                <button
                    class="primary-btn"
                    disabled={self.starting}
                    onclick={ctx.link().callback(|_| Msg::Start)}
                >
                    { label }
                </button>
            </div>
        }
    }
}
