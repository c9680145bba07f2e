use leptos::*;

use crate::{
    api::{
        self, ActionResponse, ApiClient, ApiError, LoginPayload, LoginResponse, UserProfile,
    },
    components::guard::LOGIN_PATH,
    utils::nav::hard_redirect,
};

/// A settled session fetch (success or failure) is trusted for this long;
/// afterwards the next navigation into a protected area revalidates it.
pub const SESSION_STALE_MS: f64 = 30_000.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// The single authoritative "who is logged in" store, provided once at the
/// application root. Every consumer (guard, pages, mutations) reads and
/// invalidates through here; nothing else fetches the session endpoint.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    fetched_at: RwSignal<Option<f64>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SessionState {
                loading: true,
                ..SessionState::default()
            }),
            fetched_at: create_rw_signal(None),
        }
    }

    pub fn signal(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn set(&self, token: Option<String>, user: Option<UserProfile>) {
        self.state.update(|state| {
            state.token = token;
            state.user = user;
            state.loading = false;
        });
        self.fetched_at.set(Some(now_ms()));
    }

    pub fn clear(&self) {
        self.state.update(|state| {
            state.token = None;
            state.user = None;
            state.loading = false;
        });
        self.fetched_at.set(None);
    }

    /// Marks the cached session stale so the next revalidation refetches.
    /// Idempotent; any mutation that touches the identity may call it.
    pub fn invalidate(&self) {
        self.fetched_at.set(None);
    }

    fn is_fresh(&self) -> bool {
        self.fetched_at
            .get_untracked()
            .map(|at| now_ms() - at < SESSION_STALE_MS)
            .unwrap_or(false)
    }

    /// Fetches the session unconditionally. A failed fetch is the
    /// unauthenticated state, not an error, and is final until invalidated.
    pub async fn refresh(&self, api: &ApiClient) {
        let user = match api::auth::current_user(api).await {
            Ok(response) if response.success => response.data,
            Ok(_) => None,
            Err(err) => {
                log::debug!("session fetch failed: {}", err);
                None
            }
        };
        self.state.update(|state| {
            if user.is_none() {
                state.token = None;
            }
            state.user = user;
            state.loading = false;
        });
        self.fetched_at.set(Some(now_ms()));
    }

    pub async fn revalidate(&self, api: &ApiClient) {
        if !self.is_fresh() {
            self.refresh(api).await;
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let store = SessionStore::new();
    provide_context(store);
    spawn_local(async move {
        store.refresh(&api).await;
    });
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::new)
}

/// The refetch after a successful login call, not the call itself, decides
/// whether the session ends up authenticated.
pub async fn login(
    store: SessionStore,
    api: &ApiClient,
    payload: LoginPayload,
) -> Result<ActionResponse<LoginResponse>, ApiError> {
    let response = api::auth::login(api, payload).await?;
    if response.success {
        if let Some(login) = &response.data {
            let token = login.token.clone();
            store.state.update(|state| state.token = Some(token));
        }
        store.invalidate();
        store.refresh(api).await;
    }
    Ok(response)
}

/// Best-effort server call, then an unconditional local clear and a hard
/// navigation to the login route.
pub async fn logout(store: SessionStore, api: &ApiClient) {
    if let Err(err) = api::auth::logout(api).await {
        log::warn!("logout request failed: {}", err);
    }
    store.clear();
    hard_redirect(LOGIN_PATH);
}

pub fn use_login_action() -> Action<LoginPayload, Result<ActionResponse<LoginResponse>, ApiError>> {
    let store = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_action(move |payload: &LoginPayload| {
        let payload = payload.clone();
        let api = api.clone();
        async move { login(store, &api, payload).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let store = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(store, &api).await }
    })
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_session_returns_loading_store_without_context() {
        with_runtime(|| {
            let store = use_session();
            let snapshot = store.snapshot();
            assert!(snapshot.loading);
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.token.is_none());
        });
    }

    #[test]
    fn set_and_clear_follow_the_session_lifecycle() {
        with_runtime(|| {
            let store = SessionStore::new();
            store.set(Some("T".into()), None);
            assert!(!store.snapshot().loading);
            assert_eq!(store.snapshot().token.as_deref(), Some("T"));

            store.clear();
            let snapshot = store.snapshot();
            assert!(snapshot.token.is_none());
            assert!(snapshot.user.is_none());
        });
    }
}
