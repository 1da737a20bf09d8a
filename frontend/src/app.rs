//! Application shell: hash-based routing between the landing page, the
//! registration wizard, the confirmation page, and the dashboard.

use yew::{html, Component, Context, Html};

use crate::components::dashboard::DashboardComponent;
use crate::components::landing::LandingPage;
use crate::components::submitted::SubmittedPage;
use crate::components::wizard::WizardComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Form,
    Submitted,
    Dashboard,
}

impl Route {
    fn from_hash(hash: &str) -> Self {
        match hash {
            "#/form" => Route::Form,
            "#/submitted" => Route::Submitted,
            "#/dashboard" => Route::Dashboard,
            _ => Route::Landing,
        }
    }

    fn hash(self) -> &'static str {
        match self {
            Route::Landing => "#/",
            Route::Form => "#/form",
            Route::Submitted => "#/submitted",
            Route::Dashboard => "#/dashboard",
        }
    }
}

pub enum AppMsg {
    Navigate(Route),
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let route = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Route::from_hash(&hash))
            .unwrap_or_default();
        Self { route }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(route) => {
                if let Some(window) = web_sys::window() {
                    window.location().set_hash(route.hash()).ok();
                }
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                {
                    match self.route {
                        Route::Landing => html! {
                            <LandingPage on_start={link.callback(|_| AppMsg::Navigate(Route::Form))} />
                        },
                        Route::Form => html! {
                            <WizardComponent on_finished={link.callback(|_| AppMsg::Navigate(Route::Submitted))} />
                        },
                        Route::Submitted => html! {
                            <SubmittedPage on_again={link.callback(|_| AppMsg::Navigate(Route::Form))} />
                        },
                        Route::Dashboard => html! {
                            <DashboardComponent />
                        },
                    }
                }
            </div>
        }
    }
}
