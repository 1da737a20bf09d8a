//! View rendering for the registration wizard.
//!
//! One page is rendered at a time with a step indicator above it. The
//! conditional fields mirror the draft rules: the visa assistance question
//! appears only after answering "No" to the visa question, the city
//! selectors only after requesting a booking, and each "Other" selection
//! reveals its free-text companion.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::draft::{DraftField, CITIES, MEAL_OPTIONS, OTHER, SEAT_OPTIONS};
use common::wizard::WizardPage;

use super::messages::Msg;
use super::state::WizardComponent;

pub fn view(component: &WizardComponent, ctx: &Context<WizardComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="wizard">
            { step_indicator(component) }
            {
                match component.wizard.page() {
                    WizardPage::Personal => personal_page(component, link),
                    WizardPage::Travel => travel_page(component, link),
                    WizardPage::Extras => extras_page(component, link),
                }
            }
            { nav_buttons(component, link) }
        </div>
    }
}

fn step_indicator(component: &WizardComponent) -> Html {
    let current = component.wizard.page();
    html! {
        <ol class="wizard-steps">
            {
                for WizardPage::ALL.iter().map(|page| {
                    let class = if *page == current { "step active" } else { "step" };
                    html! {
                        <li class={class}>
                            <span class="step-number">{ page.number() }</span>
                            { page.label() }
                        </li>
                    }
                })
            }
        </ol>
    }
}

fn personal_page(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let draft = &component.wizard.draft;
    html! {
        <div class="wizard-page">
            <h2>{"Personal details"}</h2>
            { text_field(link, "Full Name", DraftField::FullName, &draft.full_name) }
            { text_field(link, "Email", DraftField::Email, &draft.email) }
            { textarea_field(link, "Address", DraftField::Address, &draft.address) }
            { yes_no_field(link, "Do you hold a valid visa?", DraftField::HasVisa, &draft.has_visa) }
            {
                if draft.has_visa == "No" {
                    yes_no_field(
                        link,
                        "Do you need help arranging a visa?",
                        DraftField::NeedsVisaAssistance,
                        &draft.needs_visa_assistance,
                    )
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn travel_page(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let draft = &component.wizard.draft;
    html! {
        <div class="wizard-page">
            <h2>{"Travel"}</h2>
            { yes_no_field(link, "Do you need a flight booking?", DraftField::NeedsFlightBooking, &draft.needs_flight_booking) }
            {
                if draft.needs_flight_booking == "Yes" {
                    html! {
                        <>
                            { select_field(link, "Departure City", DraftField::DepartureCity, &draft.departure_city, &CITIES) }
                            { other_text(link, "Departure city name", DraftField::DepartureCityOther, &draft.departure_city, &draft.departure_city_other) }
                            { select_field(link, "Arrival City", DraftField::ArrivalCity, &draft.arrival_city, &CITIES) }
                            { other_text(link, "Arrival city name", DraftField::ArrivalCityOther, &draft.arrival_city, &draft.arrival_city_other) }
                            { select_field(link, "Seat Preference", DraftField::SeatPreference, &draft.seat_preference, &SEAT_OPTIONS) }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn extras_page(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let draft = &component.wizard.draft;
    html! {
        <div class="wizard-page">
            <h2>{"Preferences"}</h2>
            { text_field(link, "Preferred leisure activity", DraftField::LeisureActivity, &draft.leisure_activity) }
            { select_field(link, "Meal Preference", DraftField::MealPreference, &draft.meal_preference, &MEAL_OPTIONS) }
            { other_text(link, "Meal preference", DraftField::MealPreferenceOther, &draft.meal_preference, &draft.meal_preference_other) }
            { textarea_field(link, "Food Allergies", DraftField::FoodAllergies, &draft.food_allergies) }
        </div>
    }
}

fn nav_buttons(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let on_last_page = component.wizard.page() == WizardPage::Extras;
    html! {
        <div class="wizard-nav">
            <button
                class="secondary-btn"
                disabled={component.wizard.page() == WizardPage::Personal}
                onclick={link.callback(|_| Msg::Previous)}
            >
                {"Previous"}
            </button>
            {
                if on_last_page {
                    html! {
                        <button
                            class="primary-btn"
                            disabled={!component.wizard.can_submit() || component.submitting}
                            onclick={link.callback(|_| Msg::Submit)}
                        >
                            { if component.submitting { "Submitting ..." } else { "Submit" } }
                        </button>
                    }
                } else {
                    html! {
                        <button
                            class="primary-btn"
                            disabled={!component.wizard.can_advance()}
                            onclick={link.callback(|_| Msg::Next)}
                        >
                            {"Next"}
                        </button>
                    }
                }
            }
        </div>
    }
}

fn text_field(
    link: &Scope<WizardComponent>,
    label: &'static str,
    field: DraftField,
    value: &str,
) -> Html {
    html! {
        <label class="field">
            { label }
            <input type="text" value={value.to_string()} oninput={edit_input(link, field)} />
        </label>
    }
}

fn textarea_field(
    link: &Scope<WizardComponent>,
    label: &'static str,
    field: DraftField,
    value: &str,
) -> Html {
    html! {
        <label class="field">
            { label }
            <textarea value={value.to_string()} oninput={edit_textarea(link, field)} />
        </label>
    }
}

fn yes_no_field(
    link: &Scope<WizardComponent>,
    label: &'static str,
    field: DraftField,
    value: &str,
) -> Html {
    select_field(link, label, field, value, &["Yes", "No"])
}

fn select_field(
    link: &Scope<WizardComponent>,
    label: &'static str,
    field: DraftField,
    value: &str,
    options: &[&'static str],
) -> Html {
    html! {
        <label class="field">
            { label }
            <select onchange={edit_select(link, field)}>
                <option value="" selected={value.is_empty()}>{"Select ..."}</option>
                {
                    for options.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{ *option }</option>
                    })
                }
            </select>
        </label>
    }
}

/// Free-text companion shown only while its selector reads "Other".
fn other_text(
    link: &Scope<WizardComponent>,
    label: &'static str,
    field: DraftField,
    selection: &str,
    value: &str,
) -> Html {
    if selection == OTHER {
        text_field(link, label, field, value)
    } else {
        html! {}
    }
}

fn edit_input(link: &Scope<WizardComponent>, field: DraftField) -> Callback<InputEvent> {
    link.callback(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::Edit(field, input.value())
    })
}

fn edit_textarea(link: &Scope<WizardComponent>, field: DraftField) -> Callback<InputEvent> {
    link.callback(move |event: InputEvent| {
        let textarea: HtmlTextAreaElement = event.target_unchecked_into();
        Msg::Edit(field, textarea.value())
    })
}

fn edit_select(link: &Scope<WizardComponent>, field: DraftField) -> Callback<Event> {
    link.callback(move |event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Msg::Edit(field, select.value())
    })
}
