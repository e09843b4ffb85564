//! View rendering for the blast scheduling form.
//!
//! One `<form>` with the four controls: contact-list file input, column
//! picker, template textarea, and schedule time, posting natively to the
//! scheduling endpoint. The submit guard runs synchronously inside the
//! submit handler, so an invalid form is cancelled on the spot and a valid
//! one reaches the browser's native submission untouched. The column picker
//! is rendered from the preview state and stays disabled until a header list
//! has arrived.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::helpers::show_alert;
use super::messages::Msg;
use super::state::ScheduleBlastForm;
use super::validate::validate;

/// Main view function for the blast scheduling form.
pub fn view(component: &ScheduleBlastForm, ctx: &Context<ScheduleBlastForm>) -> Html {
    let link = ctx.link();

    let controls = component.controls.clone();
    let onsubmit = Callback::from(move |event: SubmitEvent| {
        let failures = validate(&controls.snapshot(), js_sys::Date::now());
        if !failures.is_empty() {
            event.prevent_default();
            for failure in &failures {
                show_alert(&failure.to_string());
            }
        }
    });

    let onfile = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });

    let onpick = link.callback(|e: Event| {
        let picker: HtmlSelectElement = e.target_unchecked_into();
        Msg::FieldChosen(picker.value())
    });

    let onedit = link.callback(|e: InputEvent| {
        Msg::TemplateEdited(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });

    html! {
        <form
            id="schedule-blast-form"
            class="schedule-blast-form"
            action="/schedule_blast"
            method="post"
            enctype="multipart/form-data"
            {onsubmit}
        >
            <div class="form-row">
                <label for="csv_file">{"Contact list (CSV)"}</label>
                <input
                    id="csv_file"
                    name="csv_file"
                    type="file"
                    accept=".csv"
                    ref={component.controls.csv_file.clone()}
                    onchange={onfile}
                />
            </div>

            <div class="form-row">
                <label for="field_picker">{"Insert field"}</label>
                { build_field_picker(component, onpick) }
            </div>

            <div class="form-row">
                <label for="message_template">{"Message template"}</label>
                <textarea
                    id="message_template"
                    name="message_template"
                    rows="6"
                    ref={component.controls.template.clone()}
                    value={component.text.clone()}
                    oninput={onedit}
                />
            </div>

            <div class="form-row">
                <label for="scheduled_time">{"Scheduled time"}</label>
                <input
                    id="scheduled_time"
                    name="scheduled_time"
                    type="datetime-local"
                    ref={component.controls.scheduled_time.clone()}
                />
            </div>

            <button type="submit">{"Schedule blast"}</button>
        </form>
    }
}

/// Builds the column picker. Disabled until a header list has arrived;
/// rebuilt from scratch on every successful preview: the fixed placeholder
/// option first, then one option per header in response order.
fn build_field_picker(component: &ScheduleBlastForm, onchange: Callback<Event>) -> Html {
    let headers = component.preview.headers();

    html! {
        <select
            id="field_picker"
            name="field_picker"
            ref={component.controls.field_picker.clone()}
            disabled={headers.is_none()}
            {onchange}
        >
            <option value="">{"Select a field"}</option>
            {
                for headers.unwrap_or_default().iter().map(|header| html! {
                    <option value={header.clone()}>{ header.clone() }</option>
                })
            }
        </select>
    }
}
