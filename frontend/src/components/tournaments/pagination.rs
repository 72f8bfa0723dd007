use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_page: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page))
    };

    let numbers = (1..=props.total_pages).map(|n| {
        html! {
            <button
                onclick={go_to(n)}
                class={classes!(
                    "w-10", "h-10", "rounded",
                    if n == props.page { "bg-red-600 text-white" } else { "bg-slate-800 text-gray-300 hover:bg-slate-700" }
                )}
            >
                {n}
            </button>
        }
    });

    html! {
        <nav class="flex justify-center items-center gap-2 mt-8" aria-label="Pagination">
            <button
                onclick={go_to(props.page.saturating_sub(1))}
                disabled={props.page <= 1}
                class="px-3 h-10 rounded bg-slate-800 disabled:opacity-40"
            >
                {"Previous"}
            </button>
            {for numbers}
            <button
                onclick={go_to(props.page + 1)}
                disabled={props.page >= props.total_pages}
                class="px-3 h-10 rounded bg-slate-800 disabled:opacity-40"
            >
                {"Next"}
            </button>
        </nav>
    }
}
