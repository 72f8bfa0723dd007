use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container mx-auto px-4 py-24 text-center">
            <h1 class="text-4xl font-bold mb-4">{"404 - Page Not Found"}</h1>
            <p class="text-gray-400 mb-8">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="text-purple-400 hover:text-purple-300">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
