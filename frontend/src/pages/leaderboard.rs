//! Global leaderboard with a per-player match history lookup

use log::error;
use shared::models::leaderboard::{MatchRecord, PlayerScore};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::leaderboard::{global_leaderboard, match_history};
use crate::components::tournaments::format_date;

#[derive(Clone, PartialEq)]
enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[function_component(Leaderboard)]
pub fn leaderboard() -> Html {
    let scores = use_state(|| Load::<Vec<PlayerScore>>::Loading);
    let player = use_state(String::new);
    let history = use_state(|| None::<(String, Load<Vec<MatchRecord>>)>);

    {
        let scores = scores.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match global_leaderboard().await {
                    Ok(rows) => scores.set(Load::Ready(rows)),
                    Err(e) => {
                        error!("Failed to load leaderboard: {}", e);
                        scores.set(Load::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    let lookup = {
        let history = history.clone();
        Callback::from(move |name: String| {
            let name = name.trim().to_string();
            if name.is_empty() {
                return;
            }
            history.set(Some((name.clone(), Load::Loading)));
            let history = history.clone();
            spawn_local(async move {
                let result = match match_history(&name).await {
                    Ok(matches) => Load::Ready(matches),
                    Err(e) => Load::Failed(e),
                };
                history.set(Some((name, result)));
            });
        })
    };

    let on_player_input = {
        let player = player.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            player.set(input.value());
        })
    };

    let onsubmit = {
        let player = player.clone();
        let lookup = lookup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            lookup.emit((*player).clone());
        })
    };

    let table = match &*scores {
        Load::Loading => html! { <p class="text-gray-400">{"Loading leaderboard..."}</p> },
        Load::Failed(message) => html! { <p class="text-red-400">{message.clone()}</p> },
        Load::Ready(rows) if rows.is_empty() => html! { <p class="text-gray-400">{"No matches recorded yet."}</p> },
        Load::Ready(rows) => html! {
            <table class="w-full text-left">
                <thead class="text-gray-400 text-sm">
                    <tr><th class="py-2">{"#"}</th><th>{"Player"}</th><th class="text-right">{"Score"}</th></tr>
                </thead>
                <tbody>
                    {for rows.iter().enumerate().map(|(i, row)| {
                        let onclick = {
                            let lookup = lookup.clone();
                            let name = row.player.clone();
                            Callback::from(move |_: MouseEvent| lookup.emit(name.clone()))
                        };
                        html! {
                            <tr class="border-t border-slate-700 hover:bg-slate-700/50 cursor-pointer" {onclick}>
                                <td class="py-2">{i + 1}</td>
                                <td>{row.player.clone()}</td>
                                <td class="text-right font-semibold">{row.score}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    let matches = match &*history {
        None => html! {},
        Some((name, Load::Loading)) => html! { <p class="text-gray-400">{format!("Loading matches for {}...", name)}</p> },
        Some((_, Load::Failed(message))) => html! { <p class="text-red-400">{message.clone()}</p> },
        Some((name, Load::Ready(records))) if records.is_empty() => {
            html! { <p class="text-gray-400">{format!("No matches found for {}", name)}</p> }
        }
        Some((name, Load::Ready(records))) => html! {
            <div>
                <h3 class="text-lg font-semibold mb-3">{format!("Matches for {}", name)}</h3>
                <ul class="space-y-2">
                    {for records.iter().map(|m| html! {
                        <li class="flex justify-between bg-slate-700 rounded px-3 py-2">
                            <span>{m.played_at.as_ref().map(format_date).unwrap_or_else(|| "Unknown date".to_string())}</span>
                            <span class="font-semibold">{m.score}</span>
                        </li>
                    })}
                </ul>
            </div>
        },
    };

    html! {
        <div class="container mx-auto px-4 py-10 text-white grid grid-cols-1 lg:grid-cols-3 gap-8">
            <section class="lg:col-span-2 bg-slate-800 rounded-xl p-6">
                <h1 class="text-3xl font-bold mb-6">{"Leaderboard"}</h1>
                {table}
            </section>
            <section class="bg-slate-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">{"Match History"}</h2>
                <form class="flex gap-2" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Player name"
                        value={(*player).clone()}
                        oninput={on_player_input}
                        class="flex-1 px-3 py-2 rounded-md bg-slate-700 border border-slate-600 focus:outline-none"
                    />
                    <button type="submit" class="px-4 py-2 rounded-md bg-purple-600 hover:bg-purple-700">{"Search"}</button>
                </form>
                {matches}
            </section>
        </div>
    }
}
