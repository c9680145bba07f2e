use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::RouteGuard,
    pages::{
        company::{CompanyDashboardPage, CompanyProductsPage},
        home::HomePage,
        login::LoginPage,
        owner::{OwnerAccountsPage, OwnerDashboardPage},
        pharmacy::{PharmacyDashboardPage, PharmacyOrdersPage},
    },
    state::auth::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/auth/login",
    "/company",
    "/company/products",
    "/pharmacy",
    "/pharmacy/orders",
    "/owner",
    "/owner/accounts",
];

pub const AUTH_ROUTE_PATHS: &[&str] = &["/auth/login"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/company",
    "/company/products",
    "/pharmacy",
    "/pharmacy/orders",
    "/owner",
    "/owner/accounts",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <RouteGuard>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/auth/login" view=LoginPage/>
                        <Route path="/company" view=CompanyDashboardPage/>
                        <Route path="/company/products" view=CompanyProductsPage/>
                        <Route path="/pharmacy" view=PharmacyDashboardPage/>
                        <Route path="/pharmacy/orders" view=PharmacyOrdersPage/>
                        <Route path="/owner" view=OwnerDashboardPage/>
                        <Route path="/owner/accounts" view=OwnerAccountsPage/>
                    </Routes>
                </RouteGuard>
            </Router>
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::guard::AUTH_PREFIX;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_every_role_area() {
        assert!(ROUTE_PATHS.contains(&"/company/products"));
        assert!(ROUTE_PATHS.contains(&"/pharmacy/orders"));
        assert!(ROUTE_PATHS.contains(&"/owner/accounts"));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn auth_routes_live_under_the_auth_prefix() {
        for path in AUTH_ROUTE_PATHS {
            assert!(path.starts_with(AUTH_PREFIX));
        }
        for path in PROTECTED_ROUTE_PATHS {
            assert!(!path.starts_with(AUTH_PREFIX));
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
