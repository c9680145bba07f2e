use leptos::{ev::SubmitEvent, *};

use crate::components::layout::ErrorMessage;
use crate::pages::login::view_model::use_login_view_model;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let email = vm.email;
    let password = vm.password;
    let error = vm.error;

    let submit_vm = vm.clone();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center" dir="rtl">
            <form class="w-full max-w-sm space-y-4" on:submit=handle_submit>
                <h1 class="text-xl font-bold text-center">"تسجيل الدخول"</h1>
                {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
                <div>
                    <label class="block text-sm mb-1" for="email">"البريد الإلكتروني"</label>
                    <input
                        id="email"
                        type="email"
                        class="w-full border rounded px-3 py-2"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm mb-1" for="password">"كلمة المرور"</label>
                    <input
                        id="password"
                        type="password"
                        class="w-full border rounded px-3 py-2"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-action-primary-bg text-white rounded py-2 disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "جارٍ الدخول..." } else { "دخول" }}
                </button>
            </form>
        </div>
    }
}
