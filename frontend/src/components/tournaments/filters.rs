use shared::listing::{FilterConfig, SortKey, StatusFilter, TypeFilter};
use shared::models::tournament::{TournamentStatus, TournamentType};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FilterBarProps {
    pub filters: FilterConfig,
    pub on_status: Callback<StatusFilter>,
    pub on_type: Callback<TypeFilter>,
    pub on_sort: Callback<SortKey>,
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_status_click = |filter: StatusFilter| {
        let on_status = props.on_status.clone();
        Callback::from(move |_: MouseEvent| on_status.emit(filter))
    };

    let on_type_change = {
        let on_type = props.on_type.clone();
        Callback::from(move |e: Event| {
            if let Ok(filter) = select_value(&e).parse::<TypeFilter>() {
                on_type.emit(filter);
            }
        })
    };

    let on_sort_change = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |e: Event| {
            if let Ok(sort) = select_value(&e).parse::<SortKey>() {
                on_sort.emit(sort);
            }
        })
    };

    let status_tabs = std::iter::once(StatusFilter::All)
        .chain(TournamentStatus::ALL.into_iter().map(StatusFilter::Only))
        .map(|filter| {
            let active = props.filters.status == filter;
            html! {
                <button
                    onclick={on_status_click(filter)}
                    class={classes!(
                        "px-4", "py-2", "rounded", "text-sm", "font-semibold", "capitalize",
                        if active { "bg-red-600 text-white" } else { "bg-slate-800 text-gray-300 hover:bg-slate-700" }
                    )}
                >
                    {filter.as_str()}
                </button>
            }
        });

    let type_options = std::iter::once(TypeFilter::All)
        .chain(TournamentType::ALL.into_iter().map(TypeFilter::Only))
        .map(|filter| {
            html! {
                <option value={filter.as_str()} selected={props.filters.tournament_type == filter}>
                    {if filter == TypeFilter::All { "All Types".to_string() } else { filter.as_str().to_uppercase() }}
                </option>
            }
        });

    let sort_options = SortKey::ALL.into_iter().map(|sort| {
        html! {
            <option value={sort.as_str()} selected={props.filters.sort == sort}>{sort.label()}</option>
        }
    });

    html! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-6">
            <div class="flex flex-wrap gap-2">{for status_tabs}</div>
            <div class="flex gap-2">
                <select onchange={on_type_change} class="bg-slate-800 text-white rounded px-3 py-2" aria-label="Tournament type">
                    {for type_options}
                </select>
                <select onchange={on_sort_change} class="bg-slate-800 text-white rounded px-3 py-2" aria-label="Sort order">
                    {for sort_options}
                </select>
            </div>
        </div>
    }
}
