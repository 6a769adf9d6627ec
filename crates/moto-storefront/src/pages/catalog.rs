//! Bike catalog: the filter panel, sort select, and result grid.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::data;
use crate::state::{use_store, Page};

/// Upper bound of the price slider; the priciest listing.
const MAX_CATALOG_PRICE: i64 = 3_500_000;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let state = use_store();

    let bikes = StoredValue::new(data::bikes());
    let brands = StoredValue::new(data::bike_brands());

    let query = RwSignal::new(String::new());
    let brand = RwSignal::new(String::from("all"));
    let fuel = RwSignal::new(String::from("all"));
    let sort = RwSignal::new(SortKey::Default);
    let min_price = RwSignal::new(0_i64);
    let max_price = RwSignal::new(MAX_CATALOG_PRICE);

    // The whole pipeline reruns on any control change; the catalog is
    // 30 rows, so there is nothing to incrementalize.
    let results = Memo::new(move |_| {
        let mut q = CatalogQuery::new()
            .with_query(query.get())
            .with_price_range(
                Some(Money::from_rupees(min_price.get())),
                Some(Money::from_rupees(max_price.get())),
            )
            .with_sort(sort.get());
        let selected_brand = brand.get();
        if selected_brand != "all" {
            q = q.with_brand(selected_brand);
        }
        if let Some(fuel_type) = FuelType::from_str(&fuel.get()) {
            q = q.with_fuel_type(fuel_type);
        }
        bikes.with_value(|all| q.run(all))
    });

    let clear = move |_| {
        query.set(String::new());
        brand.set(String::from("all"));
        fuel.set(String::from("all"));
        sort.set(SortKey::Default);
        min_price.set(0);
        max_price.set(MAX_CATALOG_PRICE);
    };

    view! {
        <h1>"Browse Bikes"</h1>
        <p class="page-intro">"Find your perfect two-wheeler from our collection."</p>

        <div class="filters">
            <div>
                <label>"Search"</label>
                <input
                    type="text"
                    placeholder="Search bikes..."
                    prop:value=move || query.get()
                    on:input:target=move |ev| query.set(ev.target().value())
                />
            </div>
            <div>
                <label>"Brand"</label>
                <select on:change:target=move |ev| brand.set(ev.target().value())>
                    <option value="all" selected=move || brand.get() == "all">
                        "All Brands"
                    </option>
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
                <label>"Fuel Type"</label>
                <select on:change:target=move |ev| fuel.set(ev.target().value())>
                    <option value="all">"All Types"</option>
                    {[FuelType::Petrol, FuelType::Electric, FuelType::Hybrid]
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option
                                    value=f.as_str()
                                    selected=move || fuel.get() == f.as_str()
                                >
                                    {f.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label>"Sort By"</label>
                <select on:change:target=move |ev| {
                    sort.set(SortKey::from_str(&ev.target().value()).unwrap_or_default())
                }>
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| {
                            view! {
                                <option
                                    value=key.as_str()
                                    selected=move || sort.get() == key
                                >
                                    {key.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label>
                    {move || {
                        format!(
                            "Price: {} - {}",
                            Money::from_rupees(min_price.get()).display(),
                            Money::from_rupees(max_price.get()).display(),
                        )
                    }}
                </label>
                <input
                    type="range"
                    min="0"
                    max=MAX_CATALOG_PRICE.to_string()
                    step="10000"
                    prop:value=move || min_price.get().to_string()
                    on:input:target=move |ev| {
                        min_price.set(ev.target().value().parse().unwrap_or(0))
                    }
                />
                <input
                    type="range"
                    min="0"
                    max=MAX_CATALOG_PRICE.to_string()
                    step="10000"
                    prop:value=move || max_price.get().to_string()
                    on:input:target=move |ev| {
                        max_price.set(ev.target().value().parse().unwrap_or(MAX_CATALOG_PRICE))
                    }
                />
            </div>
            <button class="btn secondary" on:click=clear>
                "Clear Filters"
            </button>
        </div>

        <div class="result-count">
            {move || {
                format!(
                    "Showing {} of {} bikes",
                    results.get().len(),
                    bikes.with_value(|all| all.len()),
                )
            }}
            <Show when=move || !state.compare.with(|c| c.is_empty())>
                " | "
                <a on:click=move |_| state.navigate(Page::Compare)>
                    {move || format!("Compare ({})", state.compare.with(|c| c.len()))}
                </a>
            </Show>
        </div>

        <div class="grid">
            {move || {
                results
                    .get()
                    .into_iter()
                    .map(|bike| view! { <CatalogCard bike=bike/> })
                    .collect_view()
            }}
        </div>

        <Show when=move || results.get().is_empty()>
            <div class="empty-state">
                <h2>"No bikes found"</h2>
                <p>"Try adjusting your search criteria or filters."</p>
                <button class="btn secondary" on:click=clear>
                    "Clear Filters"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn CatalogCard(bike: Bike) -> impl IntoView {
    let state = use_store();

    let details_bike = bike.clone();
    let compare_bike = bike.clone();
    let cart_bike = bike.clone();
    let id = bike.id.clone();
    let in_compare = Signal::derive(move || state.compare.with(|c| c.contains(&id)));

    view! {
        <div class="card">
            <img src=bike.image.clone() alt=bike.name.clone()/>
            <div class="name">
                {bike.name.clone()}
                <Show when={
                    let electric = bike.is_electric();
                    move || electric
                }>
                    " "
                    <span class="badge green">"EV"</span>
                </Show>
            </div>
            <div class="brand">{bike.brand.clone()}</div>
            <div class="price">{bike.price_display()}</div>
            <div class="meta">{bike.mileage_display()}</div>
            <div class="actions">
                <button
                    class="btn secondary"
                    on:click=move |_| state.open_details(details_bike.clone())
                >
                    "View"
                </button>
                <button
                    class="btn secondary"
                    disabled=move || {
                        in_compare.get() || state.compare.with(|c| c.is_full())
                    }
                    on:click=move |_| state.add_to_compare(&compare_bike)
                >
                    {move || if in_compare.get() { "Added" } else { "Compare" }}
                </button>
                <button class="btn" on:click=move |_| state.add_bike_to_cart(&cart_bike)>
                    "Add"
                </button>
            </div>
        </div>
    }
}
