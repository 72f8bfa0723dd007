use log::debug;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();

    // Leave the page as soon as a user is known, whether restored or freshly logged in
    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.user.clone(), move |user| {
            if user.is_some() {
                debug!("Authenticated, redirecting to tournaments");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Tournaments);
                }
            }
            || ()
        });
    }

    {
        let error = error.clone();
        use_effect_with(auth.state.error.clone(), move |auth_error| {
            if let Some(message) = auth_error {
                error.set(message.clone());
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email.trim().to_string();
            let password = password.to_string();

            if email.is_empty() || password.is_empty() {
                error.set("Please enter both email and password".to_string());
                return;
            }

            error.set(String::new());
            auth.login.emit((email, password));
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let loading = auth.state.loading;

    html! {
        <div class="min-h-[70vh] flex items-center justify-center px-4 py-12">
            <div class="max-w-md w-full bg-slate-800 rounded-xl shadow-lg p-8 space-y-6 text-white">
                <h2 class="text-center text-3xl font-extrabold">{"Sign in to your account"}</h2>
                <form class="space-y-4" {onsubmit}>
                    <div>
                        <label for="email" class="block text-sm mb-1">{"Email address"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required=true
                            class="w-full px-3 py-2 rounded-md bg-slate-700 border border-slate-600 focus:outline-none focus:border-purple-500"
                            placeholder="you@example.com"
                            onchange={onemailchange}
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm mb-1">{"Password"}</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required=true
                            class="w-full px-3 py-2 rounded-md bg-slate-700 border border-slate-600 focus:outline-none focus:border-purple-500"
                            onchange={onpasswordchange}
                        />
                    </div>

                    if !error.is_empty() {
                        <div class="text-red-400 text-sm text-center">{error.to_string()}</div>
                    }

                    <button
                        type="submit"
                        disabled={loading}
                        class="w-full py-2 rounded-md bg-purple-600 hover:bg-purple-700 font-semibold disabled:opacity-50"
                    >
                        {if loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-400">
                    {"No account yet? "}
                    <Link<Route> to={Route::SignUp} classes="text-purple-400 hover:text-purple-300">{"Sign up"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
