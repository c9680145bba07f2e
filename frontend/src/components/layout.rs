use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" dir="rtl">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn EmptyState(text: &'static str) -> impl IntoView {
    view! {
        <div class="text-center text-gray-500 p-8" dir="rtl">
            <p>{text}</p>
        </div>
    }
}
