//! Spare parts catalog with stock badges.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::data;
use crate::state::use_store;

#[component]
pub fn SparesPage() -> impl IntoView {
    let parts = StoredValue::new(data::spare_parts());
    let brands = StoredValue::new(data::part_brands());

    let query = RwSignal::new(String::new());
    let category = RwSignal::new(String::from("all"));
    let brand = RwSignal::new(String::from("all"));
    let band = RwSignal::new(PriceBand::All);

    let results = Memo::new(move |_| {
        let selected_brand = brand.get();
        let filter = PartFilter {
            query: query.get(),
            category: PartCategory::from_str(&category.get()),
            brand: (selected_brand != "all").then_some(selected_brand),
            price_band: band.get(),
        };
        parts.with_value(|all| filter.apply(all))
    });

    let clear = move |_| {
        query.set(String::new());
        category.set(String::from("all"));
        brand.set(String::from("all"));
        band.set(PriceBand::All);
    };

    view! {
        <h1>"Spare Parts"</h1>
        <p class="page-intro">"Genuine and performance parts for popular models."</p>

        <div class="filters">
            <div>
                <label>"Search"</label>
                <input
                    type="text"
                    placeholder="Search parts..."
                    prop:value=move || query.get()
                    on:input:target=move |ev| query.set(ev.target().value())
                />
            </div>
            <div>
                <label>"Category"</label>
                <select on:change:target=move |ev| category.set(ev.target().value())>
                    <option value="all">"All Categories"</option>
                    {PartCategory::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <option
                                    value=c.as_str()
                                    selected=move || category.get() == c.as_str()
                                >
                                    {c.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label>"Brand"</label>
                <select on:change:target=move |ev| brand.set(ev.target().value())>
                    <option value="all">"All Brands"</option>
                    {brands
                        .get_value()
                        .into_iter()
                        .map(|b| {
                            let value = b.clone();
                            let check = b.clone();
                            view! {
                                <option value=value selected=move || brand.get() == check>
                                    {b}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label>"Price"</label>
                <select on:change:target=move |ev| {
                    band.set(PriceBand::from_str(&ev.target().value()).unwrap_or_default())
                }>
                    {PriceBand::ALL
                        .into_iter()
                        .map(|b| {
                            view! {
                                <option
                                    value=b.as_str()
                                    selected=move || band.get() == b
                                >
                                    {b.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <button class="btn secondary" on:click=clear>
                "Clear Filters"
            </button>
        </div>

        <div class="result-count">
            {move || {
                format!(
                    "Showing {} of {} parts",
                    results.get().len(),
                    parts.with_value(|all| all.len()),
                )
            }}
        </div>

        <div class="grid">
            {move || {
                results
                    .get()
                    .into_iter()
                    .map(|part| view! { <PartCard part=part/> })
                    .collect_view()
            }}
        </div>

        <Show when=move || results.get().is_empty()>
            <div class="empty-state">
                <h2>"No parts found"</h2>
                <p>"Try a different category or price range."</p>
                <button class="btn secondary" on:click=clear>
                    "Clear Filters"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn PartCard(part: SparePart) -> impl IntoView {
    let state = use_store();

    let badge_class = match part.stock_level() {
        StockLevel::InStock => "badge green",
        StockLevel::LowStock => "badge yellow",
        StockLevel::OutOfStock => "badge red",
    };
    let in_stock = part.in_stock();
    let cart_part = part.clone();

    view! {
        <div class="card">
            <img src=part.image.clone() alt=part.name.clone()/>
            <div class="name">{part.name.clone()}</div>
            <div class="brand">{part.brand.clone()}</div>
            <span class=badge_class>{part.stock_level().display_name()}</span>
            <div class="price">{part.price_display()}</div>
            <div class="meta">{part.compatible_display()}</div>
            <p>{part.description.clone()}</p>
            <button
                class="btn"
                disabled=!in_stock
                on:click=move |_| state.add_part_to_cart(&cart_part)
            >
                {if in_stock { "Add to Cart" } else { "Out of Stock" }}
            </button>
        </div>
    }
}
