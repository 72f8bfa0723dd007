use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("🎮", "Squad Battles", "Solo, duo and squad brackets every week."),
    ("🏆", "Real Prize Pools", "Cash prizes paid out to the top placements."),
    ("⚡", "Instant Registration", "Sign up your team in under a minute."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");

    html! {
        <div>
            <section class="bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 text-white">
                <div class="container mx-auto px-4 py-24 text-center">
                    <h1 class="text-4xl sm:text-6xl font-extrabold tracking-tight mb-6">
                        {"Spirit Esports"}
                    </h1>
                    <p class="text-lg sm:text-xl text-purple-100 max-w-2xl mx-auto mb-10">
                        {"Compete in community tournaments, climb the leaderboard and win prizes with your squad."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route> to={Route::Tournaments} classes="px-8 py-3 bg-purple-600 hover:bg-purple-700 rounded-lg font-semibold">
                            {"Browse Tournaments"}
                        </Link<Route>>
                        if !auth.state.is_authenticated() {
                            <Link<Route> to={Route::SignUp} classes="px-8 py-3 border border-white/40 hover:bg-white/10 rounded-lg font-semibold">
                                {"Create Account"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </section>

            <section class="container mx-auto px-4 py-16 grid grid-cols-1 md:grid-cols-3 gap-8">
                {for HIGHLIGHTS.iter().map(|(icon, title, text)| html! {
                    <div class="bg-slate-800 rounded-xl p-6 text-white">
                        <div class="text-3xl mb-3">{*icon}</div>
                        <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                        <p class="text-gray-300">{*text}</p>
                    </div>
                })}
            </section>
        </div>
    }
}
