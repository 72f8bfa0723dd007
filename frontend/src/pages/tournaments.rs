//! Tournament listing with client-side filters and the tournament modals

use log::{debug, error};
use shared::dto::auth::UserDto;
use shared::listing::{self, derive, FilterConfig, SortKey, StatusFilter, TournamentStats, TypeFilter};
use shared::modal::{ModalOrchestrator, ModalState, RegistrationRequest};
use shared::models::tournament::Tournament;
use shared::notification::Notification;
use shared::services::{Notifier, SessionProvider, TournamentSource};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::tournaments::HttpTournamentSource;
use crate::auth::ApiSession;
use crate::components::toast::ToastContext;
use crate::components::tournaments::card::TournamentCard;
use crate::components::tournaments::details_modal::DetailsModal;
use crate::components::tournaments::filters::FilterBar;
use crate::components::tournaments::leaderboard_modal::LeaderboardModal;
use crate::components::tournaments::pagination::Pagination;
use crate::components::tournaments::registration_modal::RegistrationModal;
use crate::components::tournaments::stats::StatsBar;

#[derive(Clone, Debug, PartialEq)]
pub struct TournamentsState {
    pub tournaments: Rc<Vec<Tournament>>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub filters: FilterConfig,
    pub modals: ModalOrchestrator,
    /// Latest message for the toast stack, stamped so repeats still fire
    pub notice: Option<(u32, Notification)>,
}

impl Default for TournamentsState {
    fn default() -> Self {
        Self {
            tournaments: Rc::new(Vec::new()),
            loading: true,
            load_error: None,
            filters: FilterConfig::default(),
            modals: ModalOrchestrator::new(),
            notice: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TournamentsAction {
    Loaded(Vec<Tournament>),
    LoadFailed(String),
    SetStatus(StatusFilter),
    SetType(TypeFilter),
    SetSort(SortKey),
    SetPage(u32),
    ShowDetails(String),
    ShowLeaderboard(String),
    /// Result of the session lookup behind a register click; `None` means from the details modal
    RegistrationRequested { tournament_id: Option<String>, user: Option<UserDto> },
    RegistrationSucceeded,
    CloseModal,
}

impl TournamentsState {
    fn clamped(mut self) -> Self {
        let filtered = listing::filter_and_sort(&self.tournaments, &self.filters).len();
        if self.filters.clamp_page(listing::total_pages(filtered)) {
            debug!("Page clamped to {}", self.filters.page);
        }
        self
    }

    fn with_notice(mut self, notification: Notification) -> Self {
        let stamp = self.notice.as_ref().map(|(n, _)| n + 1).unwrap_or(0);
        self.notice = Some((stamp, notification));
        self
    }

    pub fn stats(&self) -> TournamentStats {
        TournamentStats::from_tournaments(&self.tournaments)
    }
}

impl Reducible for TournamentsState {
    type Action = TournamentsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let next = match action {
            TournamentsAction::Loaded(tournaments) => {
                next.tournaments = Rc::new(tournaments);
                next.loading = false;
                next.load_error = None;
                next.clamped()
            }
            TournamentsAction::LoadFailed(message) => {
                next.loading = false;
                next.load_error = Some(message.clone());
                next.with_notice(Notification::error(message))
            }
            TournamentsAction::SetStatus(status) => {
                next.filters.set_status(status);
                next.clamped()
            }
            TournamentsAction::SetType(tournament_type) => {
                next.filters.set_type(tournament_type);
                next.clamped()
            }
            TournamentsAction::SetSort(sort) => {
                next.filters.set_sort(sort);
                next.clamped()
            }
            TournamentsAction::SetPage(page) => {
                next.filters.set_page(page);
                next.clamped()
            }
            TournamentsAction::ShowDetails(id) => {
                next.modals.open_details(id);
                next
            }
            TournamentsAction::ShowLeaderboard(id) => {
                next.modals.open_leaderboard(id);
                next
            }
            TournamentsAction::RegistrationRequested { tournament_id, user } => {
                let request = match tournament_id {
                    Some(id) => Some(next.modals.request_registration_with(&id, user.as_ref())),
                    None => next.modals.register_from_details(user.as_ref()),
                };
                match request {
                    Some(RegistrationRequest::LoginRequired(notification)) => next.with_notice(notification),
                    _ => next,
                }
            }
            TournamentsAction::RegistrationSucceeded | TournamentsAction::CloseModal => {
                next.modals.close();
                next
            }
        };
        Rc::new(next)
    }
}

#[function_component(Tournaments)]
pub fn tournaments() -> Html {
    let state = use_reducer(TournamentsState::default);
    let toasts = use_context::<ToastContext>().expect("Toast context not found");

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match HttpTournamentSource.list_tournaments().await {
                    Ok(tournaments) => state.dispatch(TournamentsAction::Loaded(tournaments)),
                    Err(e) => {
                        error!("Failed to load tournaments: {}", e);
                        state.dispatch(TournamentsAction::LoadFailed("Failed to load tournaments".to_string()));
                    }
                }
            });
            || ()
        });
    }

    {
        let toasts = toasts.clone();
        use_effect_with(state.notice.clone(), move |notice| {
            if let Some((_, notification)) = notice {
                toasts.notify(notification.clone());
            }
            || ()
        });
    }

    let dispatch = |make: fn(String) -> TournamentsAction| {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(make(id)))
    };

    let request_registration = {
        let state = state.clone();
        move |tournament_id: Option<String>| {
            let state = state.clone();
            spawn_local(async move {
                let user = ApiSession.current_user().await;
                state.dispatch(TournamentsAction::RegistrationRequested { tournament_id, user });
            });
        }
    };

    let on_register = {
        let request_registration = request_registration.clone();
        Callback::from(move |id: String| request_registration(Some(id)))
    };
    let on_register_from_details = Callback::from(move |_: ()| request_registration(None));
    let on_details = dispatch(TournamentsAction::ShowDetails);
    let on_leaderboard = dispatch(TournamentsAction::ShowLeaderboard);

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(TournamentsAction::CloseModal))
    };
    let on_registered = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(TournamentsAction::RegistrationSucceeded))
    };
    let on_status = {
        let state = state.clone();
        Callback::from(move |f| state.dispatch(TournamentsAction::SetStatus(f)))
    };
    let on_type = {
        let state = state.clone();
        Callback::from(move |f| state.dispatch(TournamentsAction::SetType(f)))
    };
    let on_sort = {
        let state = state.clone();
        Callback::from(move |s| state.dispatch(TournamentsAction::SetSort(s)))
    };
    let on_page = {
        let state = state.clone();
        Callback::from(move |p| state.dispatch(TournamentsAction::SetPage(p)))
    };

    let view = derive(&state.tournaments, &state.filters);

    let grid = if state.loading {
        html! { <p class="text-center text-gray-400 py-16">{"Loading tournaments..."}</p> }
    } else if view.is_empty() {
        html! {
            <p class="text-center text-gray-400 py-16">
                {state.load_error.clone().unwrap_or_else(|| "No tournaments match these filters.".to_string())}
            </p>
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {for view.items.iter().map(|t| html! {
                    <TournamentCard
                        key={t.id.clone()}
                        tournament={(*t).clone()}
                        on_details={on_details.clone()}
                        on_register={on_register.clone()}
                        on_leaderboard={on_leaderboard.clone()}
                    />
                })}
            </div>
        }
    };

    let modal = match (state.modals.state(), state.modals.resolve(&state.tournaments)) {
        (ModalState::Details(_), Some(t)) => html! {
            <DetailsModal tournament={t.clone()} on_close={on_close.clone()} on_register={on_register_from_details} />
        },
        (ModalState::Registration(_), Some(t)) => html! {
            <RegistrationModal
                key={t.id.clone()}
                tournament={t.clone()}
                on_close={on_close.clone()}
                on_success={on_registered}
            />
        },
        (ModalState::Leaderboard(_), Some(t)) => html! {
            <LeaderboardModal tournament={t.clone()} on_close={on_close.clone()} />
        },
        _ => html! {},
    };

    html! {
        <div class="container mx-auto px-4 py-10">
            <h1 class="text-3xl sm:text-4xl font-bold mb-2">{state.filters.status.heading()}</h1>
            <p class="text-gray-400 mb-8">{"Pick a tournament, assemble your squad and claim your slot."}</p>
            <StatsBar stats={state.stats()} />
            <FilterBar filters={state.filters} {on_status} {on_type} {on_sort} />
            {grid}
            <Pagination page={view.page} total_pages={view.total_pages} {on_page} />
            {modal}
        </div>
    }
}
