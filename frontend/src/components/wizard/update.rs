//! Update function for the registration wizard.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//! Navigation is delegated to `common::wizard`, so a `Next` on an
//! incomplete page is a no-op here as well.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::WizardComponent;

pub fn update(
    component: &mut WizardComponent,
    ctx: &Context<WizardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            component.wizard.draft.set(field, value);
            true
        }
        Msg::Next => component.wizard.next(),
        Msg::Previous => component.wizard.previous(),
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let payload = match component.wizard.payload() {
                Some(payload) => payload,
                None => return false,
            };
            component.submitting = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::submit_registration(&payload).await {
                    Ok(message) => link.send_message(Msg::SubmitSucceeded(message)),
                    Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SubmitSucceeded(message) => {
            component.submitting = false;
            show_toast(message.as_deref().unwrap_or("Registration submitted."));
            ctx.props().on_finished.emit(());
            true
        }
        Msg::SubmitFailed(err) => {
            component.submitting = false;
            show_toast(&format!("Could not submit the registration: {}", err));
            true
        }
    }
}
