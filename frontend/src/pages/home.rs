use leptos::*;

use crate::components::layout::LoadingSpinner;

/// The guard always redirects away from "/" (to the login page or the
/// role dashboard), so this only flashes during the transition.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2 p-8" dir="rtl">
            <LoadingSpinner />
            <p class="text-sm text-gray-500">"جارٍ التحويل..."</p>
        </div>
    }
}
