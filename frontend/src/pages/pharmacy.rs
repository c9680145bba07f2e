use leptos::*;
use leptos_router::A;

use crate::{
    api::{pharmacy, ApiClient, Order},
    components::layout::{EmptyState, ErrorMessage, LoadingSpinner},
};

#[component]
pub fn PharmacyDashboardPage() -> impl IntoView {
    view! {
        <div class="p-6 space-y-4" dir="rtl">
            <h1 class="text-2xl font-bold">"لوحة الصيدلية"</h1>
            <div class="grid grid-cols-2 gap-4">
                <A href="/pharmacy/orders" class="border rounded p-4 hover:bg-gray-50">
                    <h2 class="font-semibold">"الطلبات"</h2>
                    <p class="text-sm text-gray-500">"متابعة طلبات التوريد"</p>
                </A>
                <div class="border rounded p-4">
                    <h2 class="font-semibold">"العروض"</h2>
                    <p class="text-sm text-gray-500">"تصفح عروض الشركات"</p>
                </div>
            </div>
        </div>
    }
}

/// Status narrowing and ordering happen on the already-fetched list; an
/// empty status shows everything, newest orders first.
fn visible_orders(orders: &[Order], status: &str) -> Vec<Order> {
    let mut orders: Vec<Order> = orders
        .iter()
        .filter(|order| status.is_empty() || order.status == status)
        .cloned()
        .collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

#[component]
pub fn PharmacyOrdersPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let orders = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { pharmacy::list_orders(&api).await }
        },
    );
    let (status, set_status) = create_signal(String::new());

    let visible = create_memo(move |_| {
        orders
            .get()
            .and_then(|result| result.ok())
            .filter(|response| response.success)
            .and_then(|response| response.data)
            .map(|items| visible_orders(&items, &status.get()))
            .unwrap_or_default()
    });

    let error_text = create_memo(move |_| match orders.get() {
        Some(Ok(response)) if !response.success => Some(
            response
                .error_message()
                .unwrap_or("تعذر تحميل الطلبات")
                .to_string(),
        ),
        Some(Err(err)) => Some(err.to_string()),
        _ => None,
    });

    view! {
        <div class="p-6 space-y-4" dir="rtl">
            <h1 class="text-2xl font-bold">"طلبات الصيدلية"</h1>
            <select
                class="border rounded px-3 py-2"
                on:change=move |ev| set_status.set(event_target_value(&ev))
            >
                <option value="">"كل الحالات"</option>
                <option value="pending">"قيد المراجعة"</option>
                <option value="approved">"مقبول"</option>
                <option value="delivered">"تم التسليم"</option>
            </select>
            {move || error_text.get().map(|message| view! { <ErrorMessage message=message/> })}
            {move || orders.get().is_none().then(|| view! { <LoadingSpinner /> })}
            {move || {
                let items = visible.get();
                (orders.get().is_some() && error_text.get().is_none()).then(|| {
                    if items.is_empty() {
                        view! { <EmptyState text="لا توجد طلبات" /> }.into_view()
                    } else {
                        view! {
                            <ul class="space-y-2">
                                {items
                                    .into_iter()
                                    .map(|order| view! {
                                        <li class="border rounded p-3 flex justify-between">
                                            <span>{format!("طلب رقم {}", order.id)}</span>
                                            <span class="text-sm text-gray-500">{order.status}</span>
                                            <span>{format!("{:.2} د.أ", order.total)}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                })
            }}
        </div>
    }
}
