use api::{FoodCategory, NewFoodItem, NewOrder, Order, OrderPlatform, RetryPolicy};
use dioxus::prelude::*;

use super::widgets::ErrorBanner;
use super::ModalOverlay;
use crate::format::{format_date, safe_fixed, today};
use crate::icons::{FaCircleCheck, FaEye, FaPlus, FaTrashCan, FaXmark};
use crate::queries::{snapshot, use_query, use_query_cache, QueryKey, QueryState};
use crate::{use_auth, AiRecommendationsPanel, Icon, OrderRecommendationsPanel, Spinner};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Order history with the manual entry form, details and deletion.
#[component]
pub fn OrdersView() -> Element {
    let auth = use_auth();
    let cache = use_query_cache();
    let mut show_form = use_signal(|| false);
    let mut selected = use_signal(|| Option::<Order>::None);
    let mut pending_delete = use_signal(|| Option::<Order>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let orders = use_query(QueryKey::Orders, RetryPolicy::DEFAULT, |client| async move {
        client.list_orders().await
    });

    let confirm_delete = move |_| {
        let Some(order) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let auth = auth.clone();
        spawn(async move {
            match auth.client().delete_order(&order.id).await {
                Ok(()) => {
                    tracing::info!("deleted order {}", order.id);
                    notice.set(Some("Order deleted successfully".to_string()));
                    error.set(None);
                    cache.invalidate(&QueryKey::ORDER_DEPENDENT);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    error.set(Some(e.user_message("Failed to delete order")));
                }
            }
        });
    };

    let list = match snapshot(&orders) {
        QueryState::Loading => return rsx! { Spinner {} },
        QueryState::Failed(e) => {
            let message = e.user_message("Failed to load orders");
            return rsx! {
                div { class: "page", ErrorBanner { message } }
            };
        }
        QueryState::Ready(list) => list,
    };
    let count = list.len();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "page orders",
            div { class: "page-header",
                div {
                    h1 { "Your Orders" }
                    p { class: "muted", "Track and manage your food delivery orders" }
                }
                button {
                    class: if show_form() { "btn btn--outline" } else { "btn btn--primary" },
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() {
                        Icon { icon: FaXmark, width: 14, height: 14 }
                        "Cancel"
                    } else {
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "Add New Order"
                    }
                }
            }

            if let Some(message) = notice() {
                div { class: "banner banner--success",
                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                    span { "{message}" }
                }
            }
            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if count > 0 {
                AiRecommendationsPanel {}
            }

            if show_form() {
                OrderForm {
                    on_created: move |_| {
                        show_form.set(false);
                        error.set(None);
                        notice.set(Some("Order added successfully".to_string()));
                    },
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { "Order History" }
                    span { class: "muted", "{count} orders found" }
                }
                if list.is_empty() {
                    div { class: "empty-state",
                        h3 { "No orders yet" }
                        p { class: "muted",
                            "Add your first order to start tracking your carbon footprint from food deliveries."
                        }
                        button {
                            class: "btn btn--primary",
                            onclick: move |_| show_form.set(true),
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            "Add Your First Order"
                        }
                    }
                } else {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Restaurant" }
                                th { "Date" }
                                th { "Platform" }
                                th { "Items" }
                                th { "Amount" }
                                th { "Emissions" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for order in list {
                                OrderRow {
                                    key: "{order.id}",
                                    order,
                                    on_view: move |order| selected.set(Some(order)),
                                    on_delete: move |order| pending_delete.set(Some(order)),
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(order) = selected() {
            ModalOverlay {
                title: "Order Details",
                wide: true,
                on_close: move |_| selected.set(None),
                OrderDetails { order }
            }
        }

        if let Some(order) = pending_delete() {
            ModalOverlay {
                title: "Delete order?",
                on_close: move |_| pending_delete.set(None),
                p { "Are you sure you want to delete your order from {order.restaurant_name}?" }
                div { class: "form-actions",
                    button { class: "btn btn--danger", onclick: confirm_delete, "Delete" }
                    button {
                        class: "btn btn--outline",
                        onclick: move |_| pending_delete.set(None),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Traffic-light class for an order's total emission.
fn emission_level(total: Option<f64>) -> &'static str {
    match total.unwrap_or(0.0) {
        t if t > 2.0 => "dot dot--red",
        t if t > 1.0 => "dot dot--yellow",
        _ => "dot dot--green",
    }
}

#[component]
fn OrderRow(order: Order, on_view: EventHandler<Order>, on_delete: EventHandler<Order>) -> Element {
    let date = format_date(order.order_date.as_deref());
    let initial = order.restaurant_name.chars().next().unwrap_or('R');
    let platform_class = order.platform.to_lowercase();
    let amount = safe_fixed(order.order_amount, 2);
    let total = order.total_emission();
    let level = emission_level(total);
    let emission = safe_fixed(total, 2);
    let rating = order.restaurant_rating.clone().and_then(|r| {
        let score = r.aggregate_rating?;
        Some(format!("Rating: {score} ({})", r.rating_text.unwrap_or_default()))
    });
    let view_order = order.clone();
    let delete_order = order.clone();

    rsx! {
        tr {
            td {
                div { class: "restaurant-cell",
                    if let Some(src) = order.restaurant_image.clone() {
                        img { class: "avatar", src: "{src}", alt: "{order.restaurant_name}" }
                    } else {
                        span { class: "avatar", "{initial}" }
                    }
                    div {
                        p { class: "restaurant-name", "{order.restaurant_name}" }
                        if let Some(rating) = rating {
                            span { class: "muted", "{rating}" }
                        }
                    }
                }
            }
            td { "{date}" }
            td {
                span { class: "platform platform--{platform_class}", "{order.platform}" }
            }
            td {
                for item in order.items.iter() {
                    div { class: "item-line",
                        span { class: if item.is_vegetarian() { "dot dot--green" } else { "dot dot--red" } }
                        "{item.name}"
                    }
                }
            }
            td { "₹{amount}" }
            td {
                span { class: "{level}" }
                "{emission} kg CO₂"
            }
            td {
                div { class: "row-actions",
                    button {
                        class: "icon-btn",
                        aria_label: "View order details",
                        onclick: move |_| on_view.call(view_order.clone()),
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-btn icon-btn--danger",
                        aria_label: "Delete order",
                        onclick: move |_| on_delete.call(delete_order.clone()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderDetails(order: Order) -> Element {
    let date = format_date(order.order_date.as_deref());
    let amount = safe_fixed(order.order_amount, 2);
    let emission = order.emission_data.clone().map(|data| {
        [
            ("Transport", safe_fixed(data.transport_emission, 2)),
            ("Packaging", safe_fixed(data.packaging_emission, 2)),
            ("Food", safe_fixed(data.food_emission, 2)),
            ("Total", safe_fixed(data.total_emission, 2)),
        ]
    });

    rsx! {
        div { class: "details",
            section {
                h4 { "Restaurant" }
                p { class: "restaurant-name", "{order.restaurant_name}" }
                p { class: "muted", "{order.platform} · {date}" }
                if let Some(address) = order.delivery_address.clone() {
                    p { class: "muted", "Delivered to {address}" }
                }
                if let Some(status) = order.order_status.clone() {
                    p { class: "muted", "Status: {status}" }
                }
            }

            section {
                h4 { "Order Items" }
                ul { class: "item-list",
                    for item in order.items.iter() {
                        li {
                            span { class: if item.is_vegetarian() { "dot dot--green" } else { "dot dot--red" } }
                            "{item.name}"
                            if let Some(quantity) = item.quantity {
                                span { class: "muted", " × {quantity}" }
                            }
                        }
                    }
                }
                p { "Amount: ₹{amount}" }
            }

            section {
                h4 { "Carbon Emissions" }
                if let Some(rows) = emission {
                    div { class: "breakdown",
                        for (label, value) in rows {
                            div { class: "stat-row",
                                span { class: "muted", "{label}" }
                                strong { "{value} kg CO₂" }
                            }
                        }
                    }
                } else {
                    p { class: "muted", "No emission data for this order." }
                }
            }

            section {
                h4 { "Recommendations" }
                OrderRecommendationsPanel { order_id: order.id.clone() }
            }
        }
    }
}

/// Manual order entry. Validates on the client before anything is sent.
#[component]
fn OrderForm(on_created: EventHandler<()>) -> Element {
    let auth = use_auth();
    let cache = use_query_cache();

    let mut restaurant = use_signal(String::new);
    let mut date = use_signal(today);
    let mut distance = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut platform = use_signal(OrderPlatform::default);
    let mut items = use_signal(|| vec![NewFoodItem::default()]);
    let mut saving = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let order = NewOrder {
            restaurant_name: restaurant().trim().to_string(),
            date: date(),
            food_items: items(),
            distance: distance().trim().parse().unwrap_or(f64::NAN),
            price: price().trim().parse().unwrap_or(f64::NAN),
            platform: platform(),
        };
        if let Err(problem) = order.validate() {
            form_error.set(Some(problem.to_string()));
            return;
        }
        let auth = auth.clone();
        spawn(async move {
            saving.set(true);
            form_error.set(None);
            match auth.client().create_order(&order).await {
                Ok(created) => {
                    tracing::info!("created order {}", created.id);
                    cache.invalidate(&QueryKey::ORDER_DEPENDENT);
                    on_created.call(());
                }
                Err(e) => {
                    auth.handle_error(&e);
                    form_error.set(Some(e.user_message("Failed to add order")));
                }
            }
            saving.set(false);
        });
    };

    let platform_value = platform().as_str();
    let item_count = items.read().len();

    rsx! {
        div { class: "card",
            h2 { "Add New Order" }
            if let Some(message) = form_error() {
                ErrorBanner { message }
            }
            form { class: "order-form", onsubmit: submit,
                div { class: "form-grid",
                    div { class: "field",
                        label { r#for: "restaurant", "Restaurant Name" }
                        input {
                            id: "restaurant",
                            r#type: "text",
                            placeholder: "e.g. Spice Garden",
                            value: "{restaurant}",
                            oninput: move |evt| restaurant.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "date", "Date" }
                        input {
                            id: "date",
                            r#type: "date",
                            value: "{date}",
                            oninput: move |evt| date.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "distance", "Distance (km)" }
                        input {
                            id: "distance",
                            r#type: "number",
                            min: "0",
                            step: "0.1",
                            placeholder: "e.g. 3.5",
                            value: "{distance}",
                            oninput: move |evt| distance.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "price", "Price (₹)" }
                        input {
                            id: "price",
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            placeholder: "e.g. 450.00",
                            value: "{price}",
                            oninput: move |evt| price.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "platform", "Platform" }
                        select {
                            id: "platform",
                            value: "{platform_value}",
                            onchange: move |evt| platform.set(OrderPlatform::parse(&evt.value())),
                            for choice in OrderPlatform::ALL {
                                option { value: "{choice}", selected: choice == platform(), "{choice}" }
                            }
                        }
                    }
                }

                h3 { "Food Items" }
                for (index, item) in items().into_iter().enumerate() {
                    div { key: "{index}", class: "item-row",
                        div { class: "field",
                            label { "Item Name" }
                            input {
                                r#type: "text",
                                placeholder: "e.g. Butter Chicken",
                                value: "{item.name}",
                                oninput: move |evt| items.write()[index].name = evt.value(),
                            }
                        }
                        div { class: "field field--narrow",
                            label { "Quantity" }
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{item.quantity}",
                                oninput: move |evt| {
                                    items.write()[index].quantity = evt.value().parse().unwrap_or(0);
                                },
                            }
                        }
                        div { class: "field",
                            label { "Category" }
                            select {
                                onchange: move |evt| items.write()[index].category = FoodCategory::parse(&evt.value()),
                                option {
                                    value: "veg",
                                    selected: item.category == FoodCategory::Veg,
                                    "Vegetarian"
                                }
                                option {
                                    value: "non-veg",
                                    selected: item.category == FoodCategory::NonVeg,
                                    "Non-Vegetarian"
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "icon-btn icon-btn--danger",
                            disabled: item_count <= 1,
                            onclick: move |_| {
                                items.write().remove(index);
                            },
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn--soft",
                    onclick: move |_| items.write().push(NewFoodItem::default()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Add Another Item"
                }

                div { class: "form-actions",
                    button { r#type: "submit", class: "btn btn--primary", disabled: saving(),
                        if saving() { "Adding..." } else { "Add Order" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_level_thresholds() {
        assert_eq!(emission_level(None), "dot dot--green");
        assert_eq!(emission_level(Some(1.0)), "dot dot--green");
        assert_eq!(emission_level(Some(1.5)), "dot dot--yellow");
        assert_eq!(emission_level(Some(2.01)), "dot dot--red");
    }
}
