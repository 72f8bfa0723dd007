use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthProvider;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages {
    pub mod contact;
    pub mod home;
    pub mod leaderboard;
    pub mod login;
    pub mod not_found;
    pub mod profile;
    pub mod signup;
    pub mod tournaments;
}

use pages::{
    contact::Contact, home::Home, leaderboard::Leaderboard, login::Login, not_found::NotFound, profile::Profile,
    signup::SignUp, tournaments::Tournaments,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tournaments")]
    Tournaments,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/login")]
    Login,
    #[at("/signup")]
    SignUp,
    #[at("/profile")]
    Profile,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <div class="app-container min-h-screen flex flex-col bg-slate-950 text-white">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </AuthProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Tournaments => html! { <Tournaments /> },
        Route::Leaderboard => html! { <Leaderboard /> },
        Route::Login => html! { <Login /> },
        Route::SignUp => html! { <SignUp /> },
        Route::Profile => html! { <Profile /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
