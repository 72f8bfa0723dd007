use gloo_timers::callback::Timeout;
use shared::notification::{Notification, NotificationAction, NotificationKind};
use shared::services::Notifier;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const DEFAULT_DURATION_MS: u32 = 5000;
const ERROR_DURATION_MS: u32 = 8000;

fn kind_classes(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "bg-green-600 border-green-700",
        NotificationKind::Error => "bg-red-600 border-red-700",
        NotificationKind::Warning => "bg-yellow-500 border-yellow-600",
        NotificationKind::Info => "bg-blue-600 border-blue-700",
    }
}

pub fn action_route(action: NotificationAction) -> Route {
    match action {
        NotificationAction::Login => Route::Login,
    }
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✕",
        NotificationKind::Warning => "⚠",
        NotificationKind::Info => "ℹ",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
    /// Milliseconds, `None` for manual dismiss
    pub duration: Option<u32>,
}

impl Toast {
    pub fn new(notification: Notification) -> Self {
        Self {
            id: Uuid::new_v4(),
            notification,
            duration: Some(DEFAULT_DURATION_MS),
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl Notifier for ToastContext {
    fn notify(&self, notification: Notification) {
        let toast = if notification.is_error() {
            Toast::new(notification).with_duration(ERROR_DURATION_MS)
        } else {
            Toast::new(notification)
        };
        self.add_toast.emit(toast);
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            toasts.dispatch(ToastAction::Add(toast));

            if let Some(duration_ms) = duration {
                let toasts = toasts.clone();
                Timeout::new(duration_ms, move || toasts.dispatch(ToastAction::Remove(toast_id))).forget();
            }
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: toasts.items.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastStack />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Add(toast) => items.push(toast),
            ToastAction::Remove(id) => items.retain(|t| t.id != id),
        }
        std::rc::Rc::new(Self { items })
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-[60] space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! { <ToastItem key={toast.id.to_string()} toast={toast.clone()} /> }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| remove_toast.emit(toast_id))
    };

    let navigator = use_navigator();
    let action_button = props.toast.notification.action.map(|action| {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&action_route(action));
            }
            remove_toast.emit(toast_id);
        });
        html! {
            <button
                {onclick}
                class="ml-3 px-3 py-1 rounded bg-white/20 hover:bg-white/30 text-sm font-semibold"
            >
                {action.label()}
            </button>
        }
    });

    let kind = props.toast.notification.kind;

    html! {
        <div
            role="status"
            class={classes!(
                "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
                kind_classes(kind)
            )}
        >
            <span class="mr-3 text-lg font-bold">{kind_icon(kind)}</span>
            <p class="flex-1 text-sm font-medium">{props.toast.notification.message.clone()}</p>
            {action_button.unwrap_or_default()}
            <button onclick={on_close} class="ml-3 text-white hover:text-gray-200 focus:outline-none">
                <span class="text-lg">{"×"}</span>
            </button>
        </div>
    }
}
