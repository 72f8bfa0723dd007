use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

const LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Tournaments, "Tournaments"),
    (Route::Leaderboard, "Leaderboard"),
    (Route::Contact, "Contact"),
];

fn link_classes(active: bool) -> Classes {
    classes!(
        "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
        "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
        if active {
            classes!("bg-white/20", "text-white")
        } else {
            classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
        }
    )
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let is_mobile_menu_open = use_state(|| false);

    let on_logout_click = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_mobile_menu_open.set(!*is_mobile_menu_open))
    };

    let links = LINKS.iter().map(|(route, label)| {
        html! {
            <Link<Route> to={route.clone()} classes={link_classes(*route == current_route)}>
                {*label}
            </Link<Route>>
        }
    });

    let account = match &auth.state.user {
        Some(user) => html! {
            <div class="flex items-center space-x-3">
                <Link<Route> to={Route::Profile} classes="hidden sm:inline text-sm text-white/80 hover:text-white">
                    {if user.name.trim().is_empty() { user.email.clone() } else { user.name.clone() }}
                </Link<Route>>
                <button onclick={on_logout_click} class="px-3 py-2 rounded-md text-sm font-medium bg-white/10 hover:bg-white/20">
                    {"Logout"}
                </button>
            </div>
        },
        None => html! {
            <div class="flex items-center space-x-2">
                <Link<Route> to={Route::Login} classes={link_classes(current_route == Route::Login)}>{"Login"}</Link<Route>>
                <Link<Route> to={Route::SignUp} classes="px-3 py-2 rounded-md text-sm font-semibold bg-purple-500 hover:bg-purple-400">
                    {"Sign Up"}
                </Link<Route>>
            </div>
        },
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-40", "bg-gradient-to-r", "from-slate-900", "to-purple-800",
            "text-white", "shadow-lg", "backdrop-blur-sm"
        )}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center space-x-4 sm:space-x-8">
                        <Link<Route> to={Route::Home} classes="text-lg sm:text-xl font-bold tracking-tight">
                            {"Spirit Esports"}
                        </Link<Route>>
                        <div class="hidden md:flex space-x-4">{for links.clone()}</div>
                    </div>
                    <div class="flex items-center space-x-2">
                        {account}
                        <button onclick={toggle_mobile_menu} class="md:hidden p-2 rounded-md hover:bg-white/10" aria-label="Toggle menu">
                            {"☰"}
                        </button>
                    </div>
                </div>
                if *is_mobile_menu_open {
                    <div class="md:hidden pb-4 space-y-1">{for links}</div>
                }
            </div>
        </nav>
    }
}
