use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Overlay clicks and the close button are ignored while set
    #[prop_or_default]
    pub locked: bool,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay shell shared by the tournament modals
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        let locked = props.locked;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !locked {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div class="absolute inset-0 bg-black bg-opacity-70" onclick={on_overlay_click}></div>
            <div
                class={classes!(
                    "relative", "bg-slate-900", "text-white", "rounded-lg", "shadow-xl", "p-6", "w-full", "mx-4",
                    "max-h-[90vh]", "overflow-y-auto",
                    if props.wide { "max-w-3xl" } else { "max-w-lg" }
                )}
                onclick={on_modal_click}
            >
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-xl font-bold">{props.title.clone()}</h3>
                    <button
                        onclick={on_close_click}
                        disabled={props.locked}
                        class="text-gray-400 hover:text-white disabled:opacity-40"
                        aria-label="Close"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
