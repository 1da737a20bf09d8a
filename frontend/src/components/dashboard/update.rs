//! Update function for the registrations dashboard.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render. The
//! spreadsheet download runs entirely in the client: the fetched records
//! are flattened, written to an `.xlsx` workbook, and handed to the
//! browser as a file.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::export::transform;

use crate::api;
use crate::config::{ENTITY, TRAVEL_CLASS};
use crate::helpers::{save_file, show_toast};
use crate::xlsx::{build_workbook, XLSX_MIME};

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Refresh => {
            if component.loading {
                return false;
            }
            component.loading = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_registrations().await {
                    Ok(records) => link.send_message(Msg::Loaded(records)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
            true
        }
        Msg::Loaded(records) => {
            component.records = records;
            component.loading = false;
            true
        }
        Msg::LoadFailed(err) => {
            component.records.clear();
            component.loading = false;
            show_toast(&format!("Could not load registrations: {}", err));
            true
        }
        Msg::ViewRecord(email) => {
            component.modal_open = true;
            component.modal_loading = true;
            component.selected = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_registration(&email).await {
                    Ok(record) => link.send_message(Msg::RecordLoaded(record)),
                    Err(err) => link.send_message(Msg::RecordLoadFailed(err.to_string())),
                }
            });
            true
        }
        Msg::RecordLoaded(record) => {
            component.selected = Some(record);
            component.modal_loading = false;
            true
        }
        Msg::RecordLoadFailed(err) => {
            component.modal_open = false;
            component.modal_loading = false;
            show_toast(&format!("Could not load the registration: {}", err));
            true
        }
        Msg::CloseModal => {
            component.modal_open = false;
            component.selected = None;
            true
        }
        Msg::Download => {
            if component.records.is_empty() {
                show_toast("No data available to download");
                return false;
            }

            let rows = transform(&component.records, TRAVEL_CLASS, &component.schedule);
            match build_workbook(&rows, ENTITY) {
                Ok(bytes) => {
                    let filename = format!("{}_Data_{}.xlsx", ENTITY, today_iso());
                    save_file(bytes, &filename, XLSX_MIME);
                }
                Err(err) => {
                    error!(format!("workbook generation failed: {}", err));
                    show_toast("Could not generate the spreadsheet");
                }
            }
            false
        }
    }
}

/// Today's date as `YYYY-MM-DD`, from the browser clock.
fn today_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string()
}
