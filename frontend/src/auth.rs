use async_trait::async_trait;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use shared::dto::auth::UserDto;
use shared::services::SessionProvider;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::auth;
use crate::api::utils::{stored_token, TOKEN_KEY};

const USER_KEY: &str = "auth_user";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().map(|user| !user.id.is_empty()).unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSuccess { user: UserDto, token: String },
    LoginError(String),
    SessionRestored(UserDto),
    ProfileUpdated(UserDto),
    SessionExpired,
    Logout,
}

fn clear_storage() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess { user, token } => {
                if let Err(e) = LocalStorage::set(TOKEN_KEY, &token) {
                    error!("Failed to store token in local storage: {}", e);
                }
                if let Err(e) = LocalStorage::set(USER_KEY, &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                Rc::new(Self {
                    user: Some(user),
                    loading: false,
                    error: None,
                })
            }
            AuthAction::LoginError(error) => Rc::new(Self {
                user: None,
                loading: false,
                error: Some(error),
            }),
            AuthAction::SessionRestored(user) => Rc::new(Self {
                user: Some(user),
                ..(*self).clone()
            }),
            AuthAction::ProfileUpdated(user) => {
                if let Err(e) = LocalStorage::set(USER_KEY, &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                Rc::new(Self {
                    user: Some(user),
                    ..(*self).clone()
                })
            }
            AuthAction::SessionExpired => {
                clear_storage();
                Rc::new(Self {
                    user: None,
                    loading: false,
                    error: Some("Session expired. Please log in again.".to_string()),
                })
            }
            AuthAction::Logout => {
                clear_storage();
                Rc::new(Self::default())
            }
        }
    }
}

/// Asks the backend who owns the stored token, once per call
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiSession;

#[async_trait(?Send)]
impl SessionProvider for ApiSession {
    async fn current_user(&self) -> Option<UserDto> {
        stored_token()?;
        match auth::profile().await {
            Ok(user) => Some(user),
            Err(e) => {
                debug!("No active session: {}", e);
                None
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub profile_updated: Callback<UserDto>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let user: Option<UserDto> = stored_token().and_then(|_| LocalStorage::get(USER_KEY).ok());
    let auth = use_reducer_eq(move || AuthState {
        user,
        ..Default::default()
    });

    // Re-check a remembered session once on mount
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            if stored_token().is_some() {
                spawn_local(async move {
                    match auth::profile().await {
                        Ok(user) => auth.dispatch(AuthAction::SessionRestored(user)),
                        Err(e) => {
                            debug!("Stored session rejected: {}", e);
                            auth.dispatch(AuthAction::SessionExpired);
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let auth = auth.clone();
        Callback::from(move |(email, password): (String, String)| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LoginStarted);

                let token = match auth::login(&email, &password).await {
                    Ok(token) => token,
                    Err(e) => {
                        auth.dispatch(AuthAction::LoginError(e));
                        return;
                    }
                };

                // The profile call needs the token in storage
                if let Err(e) = LocalStorage::set(TOKEN_KEY, &token) {
                    error!("Failed to store token in local storage: {}", e);
                }
                match auth::profile().await {
                    Ok(user) => auth.dispatch(AuthAction::LoginSuccess { user, token }),
                    Err(e) => {
                        clear_storage();
                        auth.dispatch(AuthAction::LoginError(e));
                    }
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::Logout))
    };

    let profile_updated = {
        let auth = auth.clone();
        Callback::from(move |user: UserDto| auth.dispatch(AuthAction::ProfileUpdated(user)))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
        profile_updated,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
