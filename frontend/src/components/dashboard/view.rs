//! View rendering for the registrations dashboard.
//!
//! A toolbar with refresh and download, the registrations table, and a
//! detail modal. The modal reuses the export transform for a single
//! record, so the detail view and the spreadsheet always agree on how a
//! record is presented (placeholders, effective cities, resolved flight
//! options).

use yew::html::Scope;
use yew::prelude::*;

use common::export::{submitted_at, transform};
use common::model::record::SubmissionRecord;

use crate::config::TRAVEL_CLASS;

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="dashboard">
            <h1>{ format!("Registrations ({})", component.records.len()) }</h1>
            { toolbar(component, link) }
            {
                if component.loading {
                    html! { <p class="dashboard-status">{"Loading registrations ..."}</p> }
                } else if component.records.is_empty() {
                    html! { <p class="dashboard-status">{"No registrations yet."}</p> }
                } else {
                    records_table(component, link)
                }
            }
            {
                if component.modal_open {
                    detail_modal(component, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn toolbar(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="dashboard-toolbar">
            <button
                class="secondary-btn"
                disabled={component.loading}
                onclick={link.callback(|_| Msg::Refresh)}
            >
                {"Refresh"}
            </button>
            <button class="primary-btn" onclick={link.callback(|_| Msg::Download)}>
                {"Download Excel"}
            </button>
        </div>
    }
}

fn records_table(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <table class="records-table">
            <thead>
                <tr>
                    <th>{"Sr No"}</th>
                    <th>{"Full Name"}</th>
                    <th>{"Email"}</th>
                    <th>{"Flight Booking"}</th>
                    <th>{"Submitted At"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for component.records.iter().map(|record| record_row(record, link)) }
            </tbody>
        </table>
    }
}

fn record_row(record: &SubmissionRecord, link: &Scope<DashboardComponent>) -> Html {
    let email = record.email_id.clone().unwrap_or_default();
    let can_view = !email.is_empty();
    html! {
        <tr>
            <td>{ record.sr_no.as_deref().unwrap_or("-") }</td>
            <td>{ record.full_name.as_deref().unwrap_or("-") }</td>
            <td>{ record.email_id.as_deref().unwrap_or("-") }</td>
            <td>{ record.flight_booking.as_deref().unwrap_or("-") }</td>
            <td>{ submitted_at(&record.created_at) }</td>
            <td>
                <button
                    class="secondary-btn"
                    disabled={!can_view}
                    onclick={link.callback(move |_| Msg::ViewRecord(email.clone()))}
                >
                    {"View"}
                </button>
            </td>
        </tr>
    }
}

fn detail_modal(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{"Registration details"}</h2>
                    <button class="secondary-btn" onclick={link.callback(|_| Msg::CloseModal)}>
                        {"Close"}
                    </button>
                </div>
                {
                    if component.modal_loading {
                        html! { <p class="dashboard-status">{"Loading ..."}</p> }
                    } else if let Some(record) = &component.selected {
                        detail_fields(component, record)
                    } else {
                        html! { <p class="dashboard-status">{"Record not available."}</p> }
                    }
                }
            </div>
        </div>
    }
}

fn detail_fields(component: &DashboardComponent, record: &SubmissionRecord) -> Html {
    let rows = transform(std::slice::from_ref(record), TRAVEL_CLASS, &component.schedule);
    let row = match rows.first() {
        Some(row) => row,
        None => return html! {},
    };
    html! {
        <dl class="detail-list">
            {
                for row.iter().map(|(label, value)| html! {
                    <>
                        <dt>{ label }</dt>
                        <dd>{ value }</dd>
                    </>
                })
            }
        </dl>
    }
}
