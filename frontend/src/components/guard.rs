use leptos::*;
use leptos_router::use_location;

use crate::{
    api::{ApiClient, UserType},
    components::layout::LoadingSpinner,
    state::auth::{use_session, SessionState},
    utils::nav::hard_redirect,
};

pub const AUTH_PREFIX: &str = "/auth";
pub const LOGIN_PATH: &str = "/auth/login";

/// Authorization table: which route prefixes each account type may browse.
/// Adding a role means adding a row here, not matching naming conventions
/// between the role enum and the URL scheme.
pub fn allowed_prefixes(user_type: UserType) -> &'static [&'static str] {
    match user_type {
        UserType::Company => &["/company"],
        UserType::Pharma => &["/pharmacy"],
        UserType::Owner => &["/owner"],
    }
}

pub fn dashboard_root(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Company => "/company",
        UserType::Pharma => "/pharmacy",
        UserType::Owner => "/owner",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    RenderChildren,
    RedirectTo(&'static str),
}

/// Route decision for a settled session. Exactly one outcome per input:
/// unauthenticated users land on the login page, authenticated users are
/// kept out of the auth pages and inside their role's route prefixes.
pub fn evaluate(session: &SessionState, path: &str) -> GuardOutcome {
    let on_auth_route = path_has_prefix(path, AUTH_PREFIX);
    match session.user.as_ref() {
        None if on_auth_route => GuardOutcome::RenderChildren,
        None => GuardOutcome::RedirectTo(LOGIN_PATH),
        Some(user) if on_auth_route => GuardOutcome::RedirectTo(dashboard_root(user.user_type)),
        Some(user) => {
            let allowed = allowed_prefixes(user.user_type)
                .iter()
                .any(|prefix| path_has_prefix(path, prefix));
            if allowed {
                GuardOutcome::RenderChildren
            } else {
                GuardOutcome::RedirectTo(dashboard_root(user.user_type))
            }
        }
    }
}

fn path_has_prefix(path: &str, prefix: &str) -> bool {
    path == prefix || path.starts_with(&format!("{}/", prefix))
}

fn should_render(session: &SessionState, path: &str) -> bool {
    !session.loading && evaluate(session, path) == GuardOutcome::RenderChildren
}

/// Navigation-level gate evaluated on every path change. While the session
/// is still loading it blocks on a placeholder; redirect decisions are only
/// ever made on a settled session.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let store = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let location = use_location();
    let session = store.signal();
    let path = location.pathname;

    create_effect(move |_| {
        let state = session.get();
        let current_path = path.get();
        if state.loading {
            return;
        }
        if !path_has_prefix(&current_path, AUTH_PREFIX) {
            // Navigating into a protected area revalidates the session in
            // case the cookie expired while the tab sat idle.
            let api = api.clone();
            spawn_local(async move {
                store.revalidate(&api).await;
            });
        }
        if let GuardOutcome::RedirectTo(target) = evaluate(&state, &current_path) {
            hard_redirect(target);
        }
    });

    let can_render = create_memo(move |_| should_render(&session.get(), &path.get()));

    view! {
        <Show
            when=move || can_render.get()
            fallback=move || {
                view! {
                    <div class="flex flex-col items-center gap-2 p-8" dir="rtl">
                        <LoadingSpinner />
                        <p class="text-sm text-gray-500">"جارٍ التحقق من الجلسة..."</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{
        anonymous_session, authenticated_session, company_user, owner_user, pharmacy_user,
    };

    #[test]
    fn anonymous_user_may_only_see_auth_routes() {
        let session = anonymous_session();
        assert_eq!(
            evaluate(&session, "/auth/login"),
            GuardOutcome::RenderChildren
        );
        assert_eq!(
            evaluate(&session, "/company/products"),
            GuardOutcome::RedirectTo(LOGIN_PATH)
        );
        assert_eq!(
            evaluate(&session, "/pharmacy"),
            GuardOutcome::RedirectTo(LOGIN_PATH)
        );
        assert_eq!(evaluate(&session, "/"), GuardOutcome::RedirectTo(LOGIN_PATH));
    }

    #[test]
    fn authenticated_user_is_bounced_off_auth_routes_to_their_dashboard() {
        assert_eq!(
            evaluate(&authenticated_session(company_user()), "/auth/login"),
            GuardOutcome::RedirectTo("/company")
        );
        assert_eq!(
            evaluate(&authenticated_session(pharmacy_user()), "/auth/login"),
            GuardOutcome::RedirectTo("/pharmacy")
        );
        assert_eq!(
            evaluate(&authenticated_session(owner_user()), "/auth/login"),
            GuardOutcome::RedirectTo("/owner")
        );
    }

    #[test]
    fn matching_role_prefix_renders_children() {
        assert_eq!(
            evaluate(&authenticated_session(company_user()), "/company"),
            GuardOutcome::RenderChildren
        );
        assert_eq!(
            evaluate(&authenticated_session(company_user()), "/company/products"),
            GuardOutcome::RenderChildren
        );
        assert_eq!(
            evaluate(&authenticated_session(owner_user()), "/owner/accounts"),
            GuardOutcome::RenderChildren
        );
    }

    #[test]
    fn role_mismatched_paths_redirect_to_the_role_root() {
        assert_eq!(
            evaluate(&authenticated_session(company_user()), "/pharmacy/orders"),
            GuardOutcome::RedirectTo("/company")
        );
        assert_eq!(
            evaluate(&authenticated_session(pharmacy_user()), "/company"),
            GuardOutcome::RedirectTo("/pharmacy")
        );
        assert_eq!(
            evaluate(&authenticated_session(owner_user()), "/"),
            GuardOutcome::RedirectTo("/owner")
        );
    }

    #[test]
    fn prefix_matching_respects_segment_boundaries() {
        // "/companyX" is not inside the company area.
        assert_eq!(
            evaluate(&authenticated_session(company_user()), "/companyX"),
            GuardOutcome::RedirectTo("/company")
        );
    }

    #[test]
    fn guard_never_renders_while_the_session_loads() {
        let mut session = anonymous_session();
        session.loading = true;
        assert!(!should_render(&session, "/auth/login"));
        assert!(!should_render(&session, "/company"));

        let settled = authenticated_session(company_user());
        assert!(should_render(&settled, "/company"));
        assert!(!should_render(&settled, "/auth/login"));
    }
}
