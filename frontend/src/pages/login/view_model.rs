use leptos::*;

use crate::api::{ActionResponse, ApiError, LoginPayload, LoginResponse};
use crate::state::auth;

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginPayload, Result<ActionResponse<LoginResponse>, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                // On success the guard sees the refreshed session and
                // navigates off the auth page by itself.
                Ok(response) if response.success => error.set(None),
                Ok(response) => error.set(Some(
                    response
                        .error_message()
                        .unwrap_or("تعذر تسجيل الدخول")
                        .to_string(),
                )),
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginPayload {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.email.get().is_empty());
            assert!(vm.password.get().is_empty());
        });
    }
}
