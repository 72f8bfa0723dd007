use log::{debug, warn};
use shared::dto::auth::{UpdateProfileRequest, UserDto};
use shared::notification::Notification;
use shared::services::Notifier;
use shared::validation::{digits_only, validate_profile, ErrorMap, ProfileField, ProfileForm};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth::update_profile;
use crate::auth::AuthContext;
use crate::components::toast::ToastContext;
use crate::Route;

const PHONE_DIGITS: usize = 10;

fn form_from(user: &UserDto) -> ProfileForm {
    ProfileForm {
        name: user.name.clone(),
        phone: user.phone.clone().unwrap_or_default(),
    }
}

/// Keeps at most ten digits, the way the phone input accepts them
fn phone_input(value: &str) -> String {
    digits_only(value).chars().take(PHONE_DIGITS).collect()
}

fn profile_request(form: &ProfileForm) -> UpdateProfileRequest {
    UpdateProfileRequest {
        name: form.name.clone(),
        phone: Some(form.phone.clone()),
    }
    .normalized()
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let editing = use_state(|| false);
    let saving = use_state(|| false);
    let form = use_state(ProfileForm::default);
    let errors = use_state(ErrorMap::<ProfileField>::new);

    let Some(user) = auth.state.user.clone() else {
        return html! {
            <div class="min-h-[60vh] flex flex-col items-center justify-center text-white px-4">
                <p class="text-gray-300 mb-4">{"Please login to view your profile."}</p>
                <Link<Route> to={Route::Login} classes="px-4 py-2 rounded-md bg-purple-600 hover:bg-purple-700 font-semibold">
                    {"Login"}
                </Link<Route>>
            </div>
        };
    };

    let on_edit = {
        let editing = editing.clone();
        let form = form.clone();
        let errors = errors.clone();
        let user = user.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(form_from(&user));
            errors.set(ErrorMap::new());
            editing.set(true);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        let saving = saving.clone();
        Callback::from(move |_: MouseEvent| {
            if !*saving {
                editing.set(false);
            }
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ProfileForm { name: input.value(), ..(*form).clone() });
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ProfileForm { phone: phone_input(&input.value()), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let profile_updated = auth.profile_updated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }

            let found = validate_profile(&form);
            if !found.is_empty() {
                debug!("Profile form has {} invalid fields", found.len());
                errors.set(found);
                return;
            }
            errors.set(ErrorMap::new());

            let request = profile_request(&form);
            if let Err(e) = request.validate() {
                warn!("Profile update rejected before sending: {}", e);
                toasts.notify(Notification::error("Please check your details and try again"));
                return;
            }

            saving.set(true);
            let saving = saving.clone();
            let editing = editing.clone();
            let toasts = toasts.clone();
            let profile_updated = profile_updated.clone();
            spawn_local(async move {
                match update_profile(&request).await {
                    Ok(user) => {
                        profile_updated.emit(user);
                        toasts.notify(Notification::success("Profile updated successfully!"));
                        editing.set(false);
                    }
                    Err(message) => toasts.notify(Notification::error(message)),
                }
                saving.set(false);
            });
        })
    };

    let error_for = |field: ProfileField| match errors.get(&field) {
        Some(error) => html! { <p class="text-red-400 text-xs mt-1">{error.message.clone()}</p> },
        None => html! {},
    };

    let input_class = |field: ProfileField| {
        classes!(
            "w-full", "px-3", "py-2", "rounded-md", "bg-slate-700", "border", "focus:outline-none",
            if errors.contains_key(&field) { "border-red-500" } else { "border-slate-600" }
        )
    };

    let display_name = if user.name.trim().is_empty() { "Not set".to_string() } else { user.name.clone() };
    let display_phone = user.phone.clone().map(|p| format!("+91 {}", p)).unwrap_or_else(|| "Not set".to_string());
    let member_since = user
        .created_at
        .map(|at| at.format("%B %Y").to_string())
        .unwrap_or_default();

    let body = if *editing {
        html! {
            <form class="space-y-4" {onsubmit}>
                <div>
                    <label for="name" class="block text-sm mb-1">{"Name"}</label>
                    <input id="name" type="text" value={form.name.clone()} oninput={on_name}
                        class={input_class(ProfileField::Name)} placeholder="Enter your name" />
                    {error_for(ProfileField::Name)}
                </div>
                <div>
                    <label for="phone" class="block text-sm mb-1">{"Phone"}</label>
                    <div class="flex items-center">
                        <span class="px-3 text-gray-400">{"+91"}</span>
                        <input id="phone" type="tel" maxlength="10" value={form.phone.clone()} oninput={on_phone}
                            class={input_class(ProfileField::Phone)} placeholder="Enter 10-digit number" />
                    </div>
                    {error_for(ProfileField::Phone)}
                </div>
                <div class="flex space-x-3">
                    <button type="submit" disabled={*saving}
                        class="flex-1 py-2 rounded-md bg-green-600 hover:bg-green-700 font-semibold disabled:opacity-50">
                        {if *saving { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" onclick={on_cancel} disabled={*saving}
                        class="flex-1 py-2 rounded-md bg-slate-600 hover:bg-slate-500 font-semibold disabled:opacity-50">
                        {"Cancel"}
                    </button>
                </div>
            </form>
        }
    } else {
        html! {
            <>
                <dl class="space-y-4">
                    <div><dt class="text-sm text-gray-400">{"Name"}</dt><dd>{display_name}</dd></div>
                    <div><dt class="text-sm text-gray-400">{"Email"}</dt><dd>{user.email.clone()}</dd></div>
                    <div><dt class="text-sm text-gray-400">{"Phone"}</dt><dd>{display_phone}</dd></div>
                    if !member_since.is_empty() {
                        <div><dt class="text-sm text-gray-400">{"Member since"}</dt><dd>{member_since}</dd></div>
                    }
                </dl>
                <button onclick={on_edit} class="w-full py-2 rounded-md bg-purple-600 hover:bg-purple-700 font-semibold">
                    {"Edit Profile"}
                </button>
            </>
        }
    };

    html! {
        <div class="min-h-[70vh] flex items-center justify-center px-4 py-12">
            <div class="max-w-md w-full bg-slate-800 rounded-xl shadow-lg p-8 space-y-6 text-white">
                <h2 class="text-center text-3xl font-extrabold">{"Your Profile"}</h2>
                {body}
            </div>
        </div>
    }
}
