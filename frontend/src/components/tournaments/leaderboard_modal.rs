use shared::models::leaderboard::TournamentStanding;
use shared::models::tournament::Tournament;
use shared::services::TournamentSource;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::tournaments::HttpTournamentSource;
use crate::components::modal::Modal;

#[derive(Properties, Clone, PartialEq)]
pub struct LeaderboardModalProps {
    pub tournament: Tournament,
    pub on_close: Callback<()>,
}

#[function_component(LeaderboardModal)]
pub fn leaderboard_modal(props: &LeaderboardModalProps) -> Html {
    let standings = use_state(|| None::<Result<Vec<TournamentStanding>, String>>);

    {
        let standings = standings.clone();
        use_effect_with(props.tournament.id.clone(), move |tournament_id| {
            let tournament_id = tournament_id.clone();
            standings.set(None);
            spawn_local(async move {
                let result = HttpTournamentSource
                    .tournament_leaderboard(&tournament_id)
                    .await
                    .map_err(|e| e.to_string());
                standings.set(Some(result));
            });
            || ()
        });
    }

    let body = match &*standings {
        None => html! { <p class="text-center text-gray-400 py-8">{"Loading leaderboard..."}</p> },
        Some(Err(e)) => html! { <p class="text-center text-red-400 py-8">{e.clone()}</p> },
        Some(Ok(rows)) if rows.is_empty() => html! {
            <p class="text-center text-gray-400 py-8">{"No results have been posted yet."}</p>
        },
        Some(Ok(rows)) => html! {
            <table class="w-full text-left">
                <thead class="text-gray-400 text-sm">
                    <tr>
                        <th class="py-2">{"Rank"}</th>
                        <th>{"Team"}</th>
                        <th class="text-right">{"Kills"}</th>
                        <th class="text-right">{"Points"}</th>
                        <th class="text-right">{"Matches"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| html! {
                        <tr class={classes!("border-t", "border-slate-700", row.is_podium().then_some("text-yellow-400 font-semibold"))}>
                            <td class="py-2">{format!("#{}", row.rank)}</td>
                            <td>{row.team_name.clone()}</td>
                            <td class="text-right">{row.kills}</td>
                            <td class="text-right">{row.points}</td>
                            <td class="text-right">{row.matches_played}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <Modal title={format!("{} Leaderboard", props.tournament.name)} on_close={props.on_close.clone()} wide=true>
            {body}
        </Modal>
    }
}
