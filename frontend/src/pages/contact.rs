use log::info;
use shared::models::contact::{ContactField, ContactForm};
use shared::notification::Notification;
use shared::services::Notifier;
use shared::validation::{validate_contact, ErrorMap, MAX_DESCRIPTION_CHARS};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::ToastContext;

const INPUTS: [(ContactField, &str, &str); 4] = [
    (ContactField::Name, "Name", "text"),
    (ContactField::Whatsapp, "WhatsApp Number", "tel"),
    (ContactField::Email, "Email", "email"),
    (ContactField::Subject, "Subject", "text"),
];

fn set_field(form: &mut ContactForm, field: ContactField, value: String) {
    match field {
        ContactField::Name => form.name = value,
        ContactField::Whatsapp => form.whatsapp = value,
        ContactField::Email => form.email = value,
        ContactField::Subject => form.subject = value,
        ContactField::Description => form.description = value,
    }
}

fn field_value(form: &ContactForm, field: ContactField) -> &str {
    match field {
        ContactField::Name => &form.name,
        ContactField::Whatsapp => &form.whatsapp,
        ContactField::Email => &form.email,
        ContactField::Subject => &form.subject,
        ContactField::Description => &form.description,
    }
}

fn description_counter(description: &str) -> String {
    format!("{}/{}", description.chars().count(), MAX_DESCRIPTION_CHARS)
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(ErrorMap::<ContactField>::new);
    let toasts = use_context::<ToastContext>().expect("Toast context not found");

    let update = {
        let form = form.clone();
        let errors = errors.clone();
        move |field: ContactField, value: String| {
            let mut next = (*form).clone();
            set_field(&mut next, field, value);
            form.set(next);
            if errors.contains_key(&field) {
                let mut remaining = (*errors).clone();
                remaining.remove(&field);
                errors.set(remaining);
            }
        }
    };

    let on_input = |field: ContactField| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(field, input.value());
        })
    };

    let on_description = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(ContactField::Description, input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = validate_contact(&form);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            info!("Contact message accepted: {}", form.subject);
            toasts.notify(Notification::success("Thanks for reaching out! We'll get back to you soon."));
            form.set(ContactForm::default());
            errors.set(ErrorMap::new());
        })
    };

    let error_for = |field: ContactField| match errors.get(&field) {
        Some(error) => html! { <p class="text-red-400 text-xs mt-1">{error.message.clone()}</p> },
        None => html! {},
    };

    let input_class = |field: ContactField| {
        classes!(
            "w-full", "px-3", "py-2", "rounded-md", "bg-slate-700", "border", "focus:outline-none",
            if errors.contains_key(&field) { "border-red-500" } else { "border-slate-600" }
        )
    };

    html! {
        <div class="container mx-auto px-4 py-12 max-w-2xl text-white">
            <h1 class="text-3xl font-bold mb-2">{"Contact Us"}</h1>
            <p class="text-gray-400 mb-8">{"Questions about a tournament or your registration? Drop us a message."}</p>
            <form class="space-y-4 bg-slate-800 rounded-xl p-6" {onsubmit}>
                {for INPUTS.iter().map(|(field, label, input_type)| html! {
                    <div>
                        <label class="block text-sm mb-1">{*label}</label>
                        <input
                            type={*input_type}
                            value={field_value(&form, *field).to_string()}
                            oninput={on_input(*field)}
                            class={input_class(*field)}
                        />
                        {error_for(*field)}
                    </div>
                })}
                <div>
                    <label class="block text-sm mb-1">{"Description"}</label>
                    <textarea
                        rows="5"
                        maxlength={MAX_DESCRIPTION_CHARS.to_string()}
                        value={form.description.clone()}
                        oninput={on_description}
                        class={input_class(ContactField::Description)}
                    />
                    <div class="flex justify-between">
                        {error_for(ContactField::Description)}
                        <p class="text-xs text-gray-500 mt-1 ml-auto">{description_counter(&form.description)}</p>
                    </div>
                </div>
                <button type="submit" class="w-full py-2 rounded-md bg-purple-600 hover:bg-purple-700 font-semibold">
                    {"Send Message"}
                </button>
            </form>
        </div>
    }
}
