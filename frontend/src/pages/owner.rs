use leptos::*;
use leptos_router::A;

use crate::{
    api::{owner, ApiClient, RejectAccountPayload},
    components::layout::{EmptyState, ErrorMessage, LoadingSpinner},
};

#[component]
pub fn OwnerDashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let stats = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { owner::platform_stats(&api).await }
        },
    );

    view! {
        <div class="p-6 space-y-4" dir="rtl">
            <h1 class="text-2xl font-bold">"لوحة المالك"</h1>
            {move || match stats.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Ok(response)) if response.success => {
                    let stats = response.data.unwrap_or_default();
                    view! {
                        <div class="grid grid-cols-3 gap-4">
                            <div class="border rounded p-4 text-center">
                                <p class="text-3xl font-bold">{stats.companies}</p>
                                <p class="text-sm text-gray-500">"شركة"</p>
                            </div>
                            <div class="border rounded p-4 text-center">
                                <p class="text-3xl font-bold">{stats.pharmacies}</p>
                                <p class="text-sm text-gray-500">"صيدلية"</p>
                            </div>
                            <div class="border rounded p-4 text-center">
                                <p class="text-3xl font-bold">{stats.orders}</p>
                                <p class="text-sm text-gray-500">"طلب"</p>
                            </div>
                        </div>
                    }
                    .into_view()
                }
                Some(Ok(response)) => view! {
                    <ErrorMessage message=response
                        .error_message()
                        .unwrap_or("تعذر تحميل الإحصاءات")
                        .to_string()/>
                }
                .into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.to_string()/> }.into_view(),
            }}
            <A href="/owner/accounts" class="inline-block border rounded px-4 py-2 hover:bg-gray-50">
                "الحسابات بانتظار الموافقة"
            </A>
        </div>
    }
}

#[component]
pub fn OwnerAccountsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let accounts = create_resource(
        || (),
        {
            let api = api.clone();
            move |_| {
                let api = api.clone();
                async move { owner::pending_accounts(&api).await }
            }
        },
    );
    let (notice, set_notice) = create_signal(None::<String>);
    let (reason, set_reason) = create_signal(String::new());

    let approve = {
        let api = api.clone();
        create_action(move |id: &String| {
            let api = api.clone();
            let id = id.clone();
            async move { owner::approve_account(&api, &id).await }
        })
    };

    let reject = {
        let api = api.clone();
        create_action(move |input: &(String, String)| {
            let api = api.clone();
            let (id, reason) = input.clone();
            async move { owner::reject_account(&api, &id, RejectAccountPayload { reason }).await }
        })
    };

    create_effect(move |_| {
        if let Some(result) = approve.value().get() {
            match result {
                Ok(response) if response.success => {
                    set_notice.set(Some("تمت الموافقة على الحساب".to_string()));
                    accounts.refetch();
                }
                Ok(response) => set_notice.set(Some(
                    response
                        .error_message()
                        .unwrap_or("تعذر تنفيذ العملية")
                        .to_string(),
                )),
                Err(err) => set_notice.set(Some(err.to_string())),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = reject.value().get() {
            match result {
                Ok(response) if response.success => {
                    set_notice.set(Some("تم رفض الحساب".to_string()));
                    accounts.refetch();
                }
                Ok(response) => set_notice.set(Some(
                    response
                        .error_message()
                        .unwrap_or("تعذر تنفيذ العملية")
                        .to_string(),
                )),
                Err(err) => set_notice.set(Some(err.to_string())),
            }
        }
    });

    view! {
        <div class="p-6 space-y-4" dir="rtl">
            <h1 class="text-2xl font-bold">"الحسابات بانتظار الموافقة"</h1>
            {move || notice.get().map(|message| view! { <ErrorMessage message=message/> })}
            <div>
                <label class="block text-sm mb-1" for="reject-reason">"سبب الرفض"</label>
                <input
                    id="reject-reason"
                    class="w-full max-w-sm border rounded px-3 py-2"
                    prop:value=move || reason.get()
                    on:input=move |ev| set_reason.set(event_target_value(&ev))
                />
            </div>
            {move || accounts.get().is_none().then(|| view! { <LoadingSpinner /> })}
            {move || match accounts.get() {
                Some(Ok(response)) if response.success => {
                    let items = response.data.unwrap_or_default();
                    if items.is_empty() {
                        view! { <EmptyState text="لا توجد حسابات معلقة" /> }.into_view()
                    } else {
                        view! {
                            <ul class="space-y-2">
                                {items
                                    .into_iter()
                                    .map(|account| {
                                        let approve_id = account.id.clone();
                                        let reject_id = account.id.clone();
                                        view! {
                                            <li class="border rounded p-3 flex items-center justify-between gap-2">
                                                <div>
                                                    <p class="font-semibold">{account.name}</p>
                                                    <p class="text-sm text-gray-500">{account.email}</p>
                                                </div>
                                                <div class="flex gap-2">
                                                    <button
                                                        class="bg-status-success-bg rounded px-3 py-1"
                                                        on:click=move |_| approve.dispatch(approve_id.clone())
                                                    >
                                                        "موافقة"
                                                    </button>
                                                    <button
                                                        class="bg-status-error-bg rounded px-3 py-1"
                                                        on:click=move |_| reject
                                                            .dispatch((reject_id.clone(), reason.get_untracked()))
                                                    >
                                                        "رفض"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }
                Some(Ok(response)) => view! {
                    <ErrorMessage message=response
                        .error_message()
                        .unwrap_or("تعذر تحميل الحسابات")
                        .to_string()/>
                }
                .into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.to_string()/> }.into_view(),
                None => ().into_view(),
            }}
        </div>
    }
}
