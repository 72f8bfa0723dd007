use log::{debug, warn};
use shared::dto::auth::RegisterRequest;
use shared::notification::Notification;
use shared::services::Notifier;
use shared::validation::{validate_sign_up, ErrorMap, SignUpField, SignUpForm};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth::register;
use crate::components::toast::ToastContext;
use crate::Route;

const FIELDS: [(SignUpField, &str, &str, &str); 5] = [
    (SignUpField::Name, "name", "Name", "text"),
    (SignUpField::Email, "email", "Email address", "email"),
    (SignUpField::Password, "password", "Password", "password"),
    (SignUpField::ConfirmPassword, "confirm_password", "Confirm password", "password"),
    (SignUpField::Phone, "phone", "Phone number", "tel"),
];

fn set_field(form: &mut SignUpForm, field: SignUpField, value: String) {
    match field {
        SignUpField::Name => form.name = value,
        SignUpField::Email => form.email = value,
        SignUpField::Password => form.password = value,
        SignUpField::ConfirmPassword => form.confirm_password = value,
        SignUpField::Phone => form.phone = value,
    }
}

fn field_value(form: &SignUpForm, field: SignUpField) -> &str {
    match field {
        SignUpField::Name => &form.name,
        SignUpField::Email => &form.email,
        SignUpField::Password => &form.password,
        SignUpField::ConfirmPassword => &form.confirm_password,
        SignUpField::Phone => &form.phone,
    }
}

/// Request sent to the backend once the client-side checks pass
fn register_request(form: &SignUpForm) -> RegisterRequest {
    RegisterRequest {
        email: form.email.trim().to_lowercase(),
        password: form.password.clone(),
        name: form.name.trim().to_string(),
        phone: Some(form.phone.trim().to_string()).filter(|p| !p.is_empty()),
    }
}

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let form = use_state(SignUpForm::default);
    let errors = use_state(ErrorMap::<SignUpField>::new);
    let submitting = use_state(|| false);
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator();

    let on_input = |field: SignUpField| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            set_field(&mut next, field, input.value());
            form.set(next);

            if errors.contains_key(&field) {
                let mut remaining = (*errors).clone();
                remaining.remove(&field);
                errors.set(remaining);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let found = validate_sign_up(&form);
            if !found.is_empty() {
                debug!("Sign-up form has {} invalid fields", found.len());
                errors.set(found);
                return;
            }
            errors.set(ErrorMap::new());

            let request = register_request(&form);
            if let Err(e) = request.validate() {
                warn!("Register request rejected before sending: {}", e);
                toasts.notify(Notification::error("Please check your details and try again"));
                return;
            }

            submitting.set(true);
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match register(&request).await {
                    Ok(_) => {
                        toasts.notify(Notification::success("Account created. Please log in."));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(message) => toasts.notify(Notification::error(message)),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-[70vh] flex items-center justify-center px-4 py-12">
            <div class="max-w-md w-full bg-slate-800 rounded-xl shadow-lg p-8 space-y-6 text-white">
                <h2 class="text-center text-3xl font-extrabold">{"Create your account"}</h2>
                <form class="space-y-4" {onsubmit}>
                    {for FIELDS.iter().map(|(field, id, label, input_type)| html! {
                        <div>
                            <label for={*id} class="block text-sm mb-1">{*label}</label>
                            <input
                                id={*id}
                                type={*input_type}
                                value={field_value(&form, *field).to_string()}
                                oninput={on_input(*field)}
                                class={classes!(
                                    "w-full", "px-3", "py-2", "rounded-md", "bg-slate-700", "border", "focus:outline-none",
                                    if errors.contains_key(field) { "border-red-500" } else { "border-slate-600" }
                                )}
                            />
                            if let Some(error) = errors.get(field) {
                                <p class="text-red-400 text-xs mt-1">{error.message.clone()}</p>
                            }
                        </div>
                    })}
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="w-full py-2 rounded-md bg-purple-600 hover:bg-purple-700 font-semibold disabled:opacity-50"
                    >
                        {if *submitting { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-400">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login} classes="text-purple-400 hover:text-purple-300">{"Log in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_register_request_normalizes_email_and_phone() {
        let form = SignUpForm {
            name: " Asha ".to_string(),
            email: " Gamer@Example.com ".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            phone: "9876543210".to_string(),
        };
        let request = register_request(&form);
        assert_eq!(request.email, "gamer@example.com");
        assert_eq!(request.name, "Asha");
        assert_eq!(request.phone.as_deref(), Some("9876543210"));
        assert!(request.validate().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_field_accessors_agree() {
        let mut form = SignUpForm::default();
        for (field, _, _, _) in FIELDS {
            set_field(&mut form, field, format!("{:?}", field));
            assert_eq!(field_value(&form, field), format!("{:?}", field));
        }
    }
}
