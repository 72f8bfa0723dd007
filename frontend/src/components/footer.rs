use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-900 to-purple-900 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8 grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="text-center md:text-left">
                    <span class="text-2xl font-bold tracking-tight">{"Spirit Esports"}</span>
                    <p class="text-purple-100 text-sm mt-2 max-w-md mx-auto md:mx-0">
                        {"Community esports tournaments for solo players, duos and squads."}
                    </p>
                </div>
                <div class="flex justify-center md:justify-end items-center space-x-6 text-sm text-purple-100">
                    <Link<Route> to={Route::Tournaments} classes="hover:text-white">{"Tournaments"}</Link<Route>>
                    <Link<Route> to={Route::Leaderboard} classes="hover:text-white">{"Leaderboard"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="hover:text-white">{"Contact"}</Link<Route>>
                </div>
            </div>
            <div class="border-t border-white/10 py-4 text-center text-xs text-purple-200">
                {format!("Spirit Esports v{}", env!("CARGO_PKG_VERSION"))}
            </div>
        </footer>
    }
}
