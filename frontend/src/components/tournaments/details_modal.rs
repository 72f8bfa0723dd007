use shared::listing::format_prize_pool;
use shared::models::tournament::Tournament;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::tournaments::format_date;

#[derive(Properties, Clone, PartialEq)]
pub struct DetailsModalProps {
    pub tournament: Tournament,
    pub on_close: Callback<()>,
    pub on_register: Callback<()>,
}

#[function_component(DetailsModal)]
pub fn details_modal(props: &DetailsModalProps) -> Html {
    let t = &props.tournament;

    let on_register = {
        let on_register = props.on_register.clone();
        Callback::from(move |_: MouseEvent| on_register.emit(()))
    };

    let rows = [
        ("Format", t.tournament_type.as_str().to_uppercase()),
        ("Status", t.status.badge().to_string()),
        ("Starts", format_date(&t.start_date)),
        ("Ends", t.end_date.as_ref().map(format_date).unwrap_or_else(|| "TBA".to_string())),
        ("Prize pool", format_prize_pool(t.prize_or_zero())),
        ("Entry fee", t.entry_fee.map(|fee| format!("₹{}", fee)).unwrap_or_else(|| "Free".to_string())),
        (
            t.tournament_type.participant_label(),
            t.participants
                .map(|p| format!("{}/{}", p.current, p.max))
                .unwrap_or_else(|| "-".to_string()),
        ),
    ];

    html! {
        <Modal title={t.name.clone()} on_close={props.on_close.clone()} wide=true>
            <dl class="grid grid-cols-2 gap-x-6 gap-y-2 mb-6">
                {for rows.into_iter().map(|(label, value)| html! {
                    <>
                        <dt class="text-gray-400">{label}</dt>
                        <dd class="font-semibold">{value}</dd>
                    </>
                })}
            </dl>
            if let Some(details) = &t.details {
                <div class="whitespace-pre-line text-gray-300 mb-6">{details.clone()}</div>
            }
            if t.is_open_for_registration() {
                <button onclick={on_register} class="w-full py-3 rounded bg-red-600 hover:bg-red-700 font-semibold">
                    {"Register Team"}
                </button>
            }
        </Modal>
    }
}
