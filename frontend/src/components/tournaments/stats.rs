use shared::listing::{format_prize_pool, TournamentStats};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatsBarProps {
    pub stats: TournamentStats,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    let stats = props.stats;
    let tiles = [
        ("Upcoming", stats.upcoming.to_string()),
        ("Live Now", stats.ongoing.to_string()),
        ("Completed", stats.completed.to_string()),
        ("Total Prize Pool", format_prize_pool(stats.total_prize_pool)),
    ];

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
            {for tiles.into_iter().map(|(label, value)| html! {
                <div class="bg-slate-800 rounded-lg p-4 text-center">
                    <div class="text-2xl font-bold text-red-500">{value}</div>
                    <div class="text-sm text-gray-400">{label}</div>
                </div>
            })}
        </div>
    }
}
