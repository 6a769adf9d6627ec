//! Cart page: line items, quantity steppers, and the order summary.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::state::{use_store, Page};

#[component]
pub fn CartPage() -> impl IntoView {
    let state = use_store();

    let entries = move || state.cart.with(|c| c.entries().to_vec());

    view! {
        <h1>"Your Cart"</h1>

        <Show
            when=move || !state.cart.with(|c| c.is_empty())
            fallback=move || {
                view! {
                    <div class="empty-state">
                        <h2>"Your cart is empty"</h2>
                        <p>"Add bikes or spare parts and they will show up here."</p>
                        <button class="btn" on:click=move |_| state.navigate(Page::Catalog)>
                            "Continue Shopping"
                        </button>
                    </div>
                }
            }
        >
            <p class="page-intro">
                {move || {
                    let count = state.cart.with(|c| c.item_count());
                    if count == 1 {
                        "1 item".to_string()
                    } else {
                        format!("{} items", count)
                    }
                }}
            </p>

            {move || {
                entries()
                    .into_iter()
                    .map(|entry| view! { <CartLine entry=entry/> })
                    .collect_view()
            }}

            <CartSummary/>
        </Show>
    }
}

#[component]
fn CartLine(entry: CartEntry) -> impl IntoView {
    let state = use_store();

    let dec_id = entry.id.clone();
    let inc_id = entry.id.clone();
    let remove_id = entry.id.clone();
    let quantity = entry.quantity;

    view! {
        <div class="cart-line">
            <img src=entry.image.clone() alt=entry.name.clone()/>
            <div class="name">{entry.name.clone()}</div>
            <div class="meta">{format!("{} each", entry.unit_price.display())}</div>
            <div class="stepper">
                <button
                    class="btn secondary"
                    on:click=move |_| state.set_cart_quantity(&dec_id, quantity - 1)
                >
                    "\u{2212}"
                </button>
                <span class="count">{quantity.to_string()}</span>
                <button
                    class="btn secondary"
                    on:click=move |_| state.set_cart_quantity(&inc_id, quantity + 1)
                >
                    "+"
                </button>
            </div>
            <div class="price">{entry.line_total().display()}</div>
            <button class="btn danger" on:click=move |_| state.remove_from_cart(&remove_id)>
                "Remove"
            </button>
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let state = use_store();

    let pricing = Memo::new(move |_| state.cart.with(|c| c.pricing()));

    view! {
        <div class="summary">
            <div class="row">
                <span>"Subtotal"</span>
                <span>{move || pricing.get().subtotal.display()}</span>
            </div>
            <div class="row">
                <span>"GST (18%)"</span>
                <span>{move || pricing.get().tax.display()}</span>
            </div>
            <div class="row">
                <span>"Shipping"</span>
                <span>
                    {move || {
                        let p = pricing.get();
                        if p.is_free_shipping() {
                            "FREE".to_string()
                        } else {
                            p.shipping.display()
                        }
                    }}
                </span>
            </div>
            <div class="row total">
                <span>"Total"</span>
                <span>{move || pricing.get().total.display()}</span>
            </div>
            <Show when=move || !pricing.get().is_free_shipping()>
                <div class="hint">
                    {move || {
                        pricing
                            .get()
                            .free_shipping_gap()
                            .map(|gap| {
                                format!("Add {} more for free shipping.", gap.display())
                            })
                            .unwrap_or_default()
                    }}
                </div>
            </Show>
            <button class="btn">"Proceed to Checkout"</button>
        </div>
    }
}
