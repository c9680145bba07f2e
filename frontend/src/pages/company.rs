use leptos::*;
use leptos_router::A;

use crate::{
    api::{company, ApiClient, Product},
    components::layout::{EmptyState, ErrorMessage, LoadingSpinner},
};

#[component]
pub fn CompanyDashboardPage() -> impl IntoView {
    view! {
        <div class="p-6 space-y-4" dir="rtl">
            <h1 class="text-2xl font-bold">"لوحة الشركة"</h1>
            <div class="grid grid-cols-2 gap-4">
                <A href="/company/products" class="border rounded p-4 hover:bg-gray-50">
                    <h2 class="font-semibold">"المنتجات"</h2>
                    <p class="text-sm text-gray-500">"إدارة منتجات الشركة وأسعارها"</p>
                </A>
                <div class="border rounded p-4">
                    <h2 class="font-semibold">"المستودعات"</h2>
                    <p class="text-sm text-gray-500">"متابعة المخزون حسب المستودع"</p>
                </div>
            </div>
        </div>
    }
}

/// Lists are fetched once and narrowed in memory; the backend is not asked
/// to filter.
fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.trim();
    products
        .iter()
        .filter(|product| {
            query.is_empty()
                || product.name.contains(query)
                || product
                    .category
                    .as_deref()
                    .map(|category| category.contains(query))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[component]
pub fn CompanyProductsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let products = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { company::list_products(&api).await }
        },
    );
    let (query, set_query) = create_signal(String::new());

    let filtered = create_memo(move |_| {
        products
            .get()
            .and_then(|result| result.ok())
            .filter(|response| response.success)
            .and_then(|response| response.data)
            .map(|items| filter_products(&items, &query.get()))
            .unwrap_or_default()
    });

    let error_text = create_memo(move |_| match products.get() {
        Some(Ok(response)) if !response.success => Some(
            response
                .error_message()
                .unwrap_or("تعذر تحميل المنتجات")
                .to_string(),
        ),
        Some(Err(err)) => Some(err.to_string()),
        _ => None,
    });

    view! {
        <div class="p-6 space-y-4" dir="rtl">
            <h1 class="text-2xl font-bold">"منتجات الشركة"</h1>
            <input
                type="search"
                class="w-full max-w-sm border rounded px-3 py-2"
                placeholder="ابحث بالاسم أو التصنيف"
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            {move || error_text.get().map(|message| view! { <ErrorMessage message=message/> })}
            {move || products.get().is_none().then(|| view! { <LoadingSpinner /> })}
            {move || {
                let items = filtered.get();
                (products.get().is_some() && error_text.get().is_none()).then(|| {
                    if items.is_empty() {
                        view! { <EmptyState text="لا توجد منتجات مطابقة" /> }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-right border-collapse">
                                <thead>
                                    <tr class="border-b">
                                        <th class="py-2">"الاسم"</th>
                                        <th class="py-2">"التصنيف"</th>
                                        <th class="py-2">"السعر"</th>
                                        <th class="py-2">"المخزون"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .into_iter()
                                        .map(|product| view! {
                                            <tr class="border-b">
                                                <td class="py-2">{product.name}</td>
                                                <td class="py-2">{product.category.unwrap_or_default()}</td>
                                                <td class="py-2">{format!("{:.2}", product.price)}</td>
                                                <td class="py-2">{product.stock}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view()
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: Option<&str>) -> Product {
        Product {
            id: name.to_string(),
            name: name.to_string(),
            category: category.map(|c| c.to_string()),
            price: 10.0,
            stock: 5,
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let products = vec![product("a", None), product("b", None)];
        assert_eq!(filter_products(&products, "").len(), 2);
        assert_eq!(filter_products(&products, "  ").len(), 2);
    }

    #[test]
    fn query_matches_name_or_category() {
        let products = vec![
            product("باراسيتامول", Some("مسكنات")),
            product("أموكسيسيلين", Some("مضادات حيوية")),
        ];
        assert_eq!(filter_products(&products, "باراسيتامول").len(), 1);
        assert_eq!(filter_products(&products, "مضادات").len(), 1);
        assert!(filter_products(&products, "فيتامين").is_empty());
    }
}
