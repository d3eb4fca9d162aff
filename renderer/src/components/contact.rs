//! Contact: lead capture form.
//!
//! The form posts straight to `formAction`; there is no client-side script.
//! When the content lists no fields, the standard name/email/phone/message
//! set is used.

use leptos::prelude::*;

use super::SectionTitle;
use crate::content::{ContactContent, FormField};

/// Lead form
#[component]
pub fn ContactSection(content: ContactContent) -> impl IntoView {
    let ContactContent {
        title,
        subtitle,
        form_action,
        fields,
        submit_button,
        ..
    } = content;

    let fields = if fields.is_empty() { FormField::defaults() } else { fields };
    let submit = if submit_button.text.is_empty() {
        "Send".to_string()
    } else {
        submit_button.text
    };

    view! {
        <div class="container narrow">
            <SectionTitle title=title subtitle=subtitle />
            <form class="contact-form" action=form_action method="post">
                {fields.into_iter().map(|field| view! { <FormInput field=field /> }).collect::<Vec<_>>()}
                <button type="submit" class="btn btn-primary">{submit}</button>
            </form>
        </div>
    }
}

#[component]
fn FormInput(field: FormField) -> impl IntoView {
    let id = format!("field-{}", field.name);
    let input = if field.input_type == "textarea" {
        view! {
            <textarea
                id=id.clone()
                name=field.name
                rows="4"
                placeholder=field.placeholder
                required=field.required
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type=field.input_type
                name=field.name
                placeholder=field.placeholder
                required=field.required
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field" for=id>
            <span>{field.label}</span>
            {input}
        </label>
    }
}
