#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::types::{UserProfile, UserType};
    use crate::state::auth::SessionState;

    pub fn company_user() -> UserProfile {
        UserProfile {
            id: "u-company".into(),
            name: "شركة الدواء المتحدة".into(),
            email: "company@example.com".into(),
            phone: None,
            user_type: UserType::Company,
        }
    }

    pub fn pharmacy_user() -> UserProfile {
        UserProfile {
            id: "u-pharmacy".into(),
            name: "صيدلية النور".into(),
            email: "pharmacy@example.com".into(),
            phone: Some("0790000000".into()),
            user_type: UserType::Pharma,
        }
    }

    pub fn owner_user() -> UserProfile {
        UserProfile {
            id: "u-owner".into(),
            name: "مدير المنصة".into(),
            email: "owner@example.com".into(),
            phone: None,
            user_type: UserType::Owner,
        }
    }

    pub fn authenticated_session(user: UserProfile) -> SessionState {
        SessionState {
            token: Some("T".into()),
            user: Some(user),
            loading: false,
        }
    }

    pub fn anonymous_session() -> SessionState {
        SessionState {
            token: None,
            user: None,
            loading: false,
        }
    }
}
