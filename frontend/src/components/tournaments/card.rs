use shared::listing::format_prize_pool;
use shared::models::tournament::{Tournament, TournamentStatus};
use yew::prelude::*;

use crate::components::tournaments::format_date;

#[derive(Properties, Clone, PartialEq)]
pub struct TournamentCardProps {
    pub tournament: Tournament,
    pub on_details: Callback<String>,
    pub on_register: Callback<String>,
    pub on_leaderboard: Callback<String>,
}

fn status_classes(status: TournamentStatus) -> &'static str {
    match status {
        TournamentStatus::Upcoming => "bg-green-600",
        TournamentStatus::Ongoing => "bg-yellow-500",
        TournamentStatus::Completed => "bg-gray-500",
    }
}

#[function_component(TournamentCard)]
pub fn tournament_card(props: &TournamentCardProps) -> Html {
    let t = &props.tournament;

    let emit_with_id = |callback: &Callback<String>| {
        let callback = callback.clone();
        let id = t.id.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    let participants = t.participants.map(|p| {
        html! {
            <span>{format!("{} {}/{}", t.tournament_type.participant_label(), p.current, p.max)}</span>
        }
    });

    let action = match t.status {
        TournamentStatus::Upcoming if t.is_full() => html! {
            <button disabled=true class="w-full py-2 rounded bg-gray-600 text-gray-300 cursor-not-allowed">
                {"Tournament Full"}
            </button>
        },
        TournamentStatus::Upcoming => html! {
            <button onclick={emit_with_id(&props.on_register)} class="w-full py-2 rounded bg-red-600 hover:bg-red-700 font-semibold">
                {"Register Now"}
            </button>
        },
        TournamentStatus::Ongoing | TournamentStatus::Completed => html! {
            <button onclick={emit_with_id(&props.on_leaderboard)} class="w-full py-2 rounded bg-slate-700 hover:bg-slate-600 font-semibold">
                {"View Leaderboard"}
            </button>
        },
    };

    html! {
        <div class="bg-slate-800 rounded-lg overflow-hidden shadow-lg flex flex-col">
            if let Some(image) = &t.image_url {
                <img src={image.clone()} alt={t.name.clone()} class="h-40 w-full object-cover" />
            }
            <div class="p-4 flex-1 flex flex-col gap-2">
                <div class="flex items-center justify-between">
                    <span class={classes!("text-xs", "font-bold", "px-2", "py-1", "rounded", status_classes(t.status))}>
                        {t.status.badge()}
                    </span>
                    <span class="text-xs uppercase text-gray-400">{t.tournament_type.as_str()}</span>
                </div>
                <h3 class="text-lg font-bold">{t.name.clone()}</h3>
                <div class="text-sm text-gray-300 flex flex-col gap-1">
                    <span>{format!("Starts {}", format_date(&t.start_date))}</span>
                    <span>{format!("Prize pool {}", format_prize_pool(t.prize_or_zero()))}</span>
                    if let Some(fee) = t.entry_fee {
                        <span>{format!("Entry ₹{}", fee)}</span>
                    }
                    {for participants}
                </div>
                <div class="mt-auto flex flex-col gap-2 pt-2">
                    {action}
                    <button onclick={emit_with_id(&props.on_details)} class="w-full py-2 rounded border border-slate-600 hover:bg-slate-700">
                        {"View Details"}
                    </button>
                </div>
            </div>
        </div>
    }
}
