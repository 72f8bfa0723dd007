use chrono::Utc;
use log::{debug, warn};
use shared::models::registration::RegistrationField;
use shared::models::tournament::Tournament;
use shared::registration_form::{FormPhase, RegistrationForm};
use shared::services::{Notifier, RegistrationSink};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::registrations::HttpRegistrationSink;
use crate::components::modal::Modal;
use crate::components::toast::ToastContext;

#[derive(Properties, Clone, PartialEq)]
pub struct RegistrationModalProps {
    pub tournament: Tournament,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

const FIELDS: [(RegistrationField, &str, &str); 8] = [
    (RegistrationField::TeamName, "Team Name *", "text"),
    (RegistrationField::Player1, "Player 1 (Captain) *", "text"),
    (RegistrationField::Player2, "Player 2 *", "text"),
    (RegistrationField::Player3, "Player 3 *", "text"),
    (RegistrationField::Player4, "Player 4 *", "text"),
    (RegistrationField::Player5, "Player 5 (Substitute)", "text"),
    (RegistrationField::Player6, "Player 6 (Substitute)", "text"),
    (RegistrationField::WhatsappNumber, "WhatsApp Number *", "tel"),
];

#[function_component(RegistrationModal)]
pub fn registration_modal(props: &RegistrationModalProps) -> Html {
    let form = use_mut_ref(|| RegistrationForm::new(props.tournament.id.clone()));
    let rerender = use_force_update();
    let toasts = use_context::<ToastContext>().expect("Toast context not found");

    let on_input = |field: RegistrationField| {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if form.borrow_mut().set_field(field, value).is_ok() {
                rerender.force_update();
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let rerender = rerender.clone();
        let toasts = toasts.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let begun = form.borrow_mut().begin_submit(Utc::now());
            rerender.force_update();

            let record = match begun {
                Ok(record) => record,
                Err(blocked) => {
                    debug!("Submit ignored: {}", blocked);
                    return;
                }
            };

            let form = form.clone();
            let rerender = rerender.clone();
            let toasts = toasts.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let outcome = HttpRegistrationSink.insert_registration(&record).await;
                let completed = form.borrow_mut().complete(outcome);
                match completed {
                    Ok(notification) => {
                        let success = matches!(form.borrow().phase(), FormPhase::Success);
                        toasts.notify(notification);
                        if success {
                            on_success.emit(());
                        } else {
                            rerender.force_update();
                        }
                    }
                    Err(e) => warn!("Registration completed out of order: {}", e),
                }
            });
        })
    };

    let on_cancel = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if form.borrow_mut().cancel().is_ok() {
                on_close.emit(());
            }
        })
    };

    let current = form.borrow();
    let submitting = current.is_submitting();

    let inputs = FIELDS.iter().map(|(field, label, input_type)| {
        let error = current.errors().get(field).map(|e| e.message.clone());
        html! {
            <div>
                <label class="block text-sm text-gray-300 mb-1" for={field.as_str()}>{*label}</label>
                <input
                    id={field.as_str()}
                    type={*input_type}
                    value={current.draft().get(*field).to_string()}
                    oninput={on_input(*field)}
                    disabled={submitting}
                    class={classes!(
                        "w-full", "px-3", "py-2", "rounded", "bg-slate-800", "border",
                        if error.is_some() { "border-red-500" } else { "border-slate-600" }
                    )}
                />
                if let Some(message) = error {
                    <p class="text-red-400 text-xs mt-1">{message}</p>
                }
            </div>
        }
    });

    let cancel_click = {
        let on_cancel = on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <Modal title={format!("Register for {}", props.tournament.name)} on_close={on_cancel} locked={submitting}>
            <form {onsubmit} class="flex flex-col gap-3">
                {for inputs}
                <div class="flex gap-3 pt-2">
                    <button
                        type="button"
                        onclick={cancel_click}
                        disabled={submitting}
                        class="flex-1 py-2 rounded border border-slate-600 disabled:opacity-40"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={!current.is_submit_enabled()}
                        class="flex-1 py-2 rounded bg-red-600 hover:bg-red-700 font-semibold disabled:opacity-40"
                    >
                        {if submitting { "Registering..." } else { "Register" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
