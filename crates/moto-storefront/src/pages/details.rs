//! Bike detail view for the currently selected listing.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::data;
use crate::state::{use_store, Page};

/// Teaser EMI tenure shown on the detail card, in months.
const TEASER_TENURE_MONTHS: i64 = 36;

/// Assumed down payment for the teaser, in basis points of the price.
const DOWN_PAYMENT_BP: i64 = 2_000;

/// Equipment every listed model ships with.
const STANDARD_FEATURES: [&str; 8] = [
    "ABS (Anti-lock Braking System)",
    "LED Headlights & Taillights",
    "Digital Instrument Cluster",
    "USB Charging Port",
    "Comfortable Riding Position",
    "Tubeless Tires",
    "Electric Start",
    "Disc Brakes (Front & Rear)",
];

#[component]
pub fn DetailsPage() -> impl IntoView {
    let state = use_store();

    move || match state.selected_bike.get() {
        Some(bike) => view! { <BikeDetail bike=bike/> }.into_any(),
        None => view! {
            <div class="empty-state">
                <h2>"No bike selected"</h2>
                <p>"Pick a bike from the catalog to see its full specifications."</p>
                <button class="btn" on:click=move |_| state.navigate(Page::Catalog)>
                    "Browse Bikes"
                </button>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn BikeDetail(bike: Bike) -> impl IntoView {
    let state = use_store();

    let cart_bike = bike.clone();
    let compare_bike = bike.clone();
    let id = bike.id.clone();
    let in_compare = Signal::derive(move || state.compare.with(|c| c.contains(&id)));

    // Flat-rate teaser; the real amortized figure lives on the
    // calculators page.
    let emi_from = Money::from_paise(bike.price.paise / TEASER_TENURE_MONTHS);
    let down_payment = bike.price.scale_bp(DOWN_PAYMENT_BP);

    let related: Vec<Bike> = data::bikes()
        .into_iter()
        .filter(|b| b.segment == bike.segment && b.id != bike.id)
        .take(4)
        .collect();

    view! {
        <button class="btn secondary" on:click=move |_| state.navigate(Page::Catalog)>
            "\u{2190} Back to Catalog"
        </button>

        <div class="detail-layout">
            <img class="detail-image" src=bike.image.clone() alt=bike.name.clone()/>
            <div class="detail-info">
                <h1>{bike.name.clone()}</h1>
                <div class="brand">{bike.brand.clone()}</div>
                <div class="price">{bike.price_display()}</div>
                <Show when={
                    let electric = bike.is_electric();
                    move || electric
                }>
                    <span class="badge green">"Electric Vehicle"</span>
                </Show>
                <p>{bike.description.clone()}</p>
                <div class="actions">
                    <button class="btn" on:click=move |_| state.add_bike_to_cart(&cart_bike)>
                        "Add to Cart"
                    </button>
                    <button
                        class="btn secondary"
                        disabled=move || {
                            in_compare.get() || state.compare.with(|c| c.is_full())
                        }
                        on:click=move |_| state.add_to_compare(&compare_bike)
                    >
                        {move || {
                            if in_compare.get() { "Added to Compare" } else { "Compare" }
                        }}
                    </button>
                </div>
            </div>
        </div>

        <h2>"Specifications"</h2>
        <table class="compare-table">
            <tbody>
                <tr>
                    <th>"Engine"</th>
                    <td>{bike.engine.displacement.clone()}</td>
                </tr>
                <tr>
                    <th>"Power"</th>
                    <td>{bike.engine.power.clone()}</td>
                </tr>
                <tr>
                    <th>"Torque"</th>
                    <td>{bike.engine.torque.clone()}</td>
                </tr>
                <tr>
                    <th>"Max RPM"</th>
                    <td>{bike.engine.max_rpm.clone()}</td>
                </tr>
                <tr>
                    <th>"Cylinders"</th>
                    <td>{bike.engine.cylinders.to_string()}</td>
                </tr>
                <tr>
                    <th>"Mileage"</th>
                    <td>{bike.mileage_display()}</td>
                </tr>
                <tr>
                    <th>"Fuel Type"</th>
                    <td>{bike.fuel_type.display_name()}</td>
                </tr>
                <tr>
                    <th>"Segment"</th>
                    <td>{bike.segment.display_name()}</td>
                </tr>
            </tbody>
        </table>

        <h2>"Key Features"</h2>
        <ul>
            {STANDARD_FEATURES
                .iter()
                .map(|feature| view! { <li>{*feature}</li> })
                .collect_view()}
        </ul>

        <h2>"Financing"</h2>
        <div class="stats">
            <div class="stat">
                <div class="value">{format!("{}/mo", emi_from.display())}</div>
                <div class="label">"EMI starting from"</div>
            </div>
            <div class="stat">
                <div class="value">{down_payment.display()}</div>
                <div class="label">"Down payment (20%)"</div>
            </div>
            <div class="stat">
                <button class="btn" on:click=move |_| state.navigate(Page::Calculators)>
                    "Calculate EMI"
                </button>
            </div>
        </div>

        <Show when={
            let has_related = !related.is_empty();
            move || has_related
        }>
            <h2>"You Might Also Like"</h2>
        </Show>
        <div class="grid">
            {related
                .into_iter()
                .map(|related_bike| {
                    let open = related_bike.clone();
                    view! {
                        <div class="card">
                            <img src=related_bike.image.clone() alt=related_bike.name.clone()/>
                            <div class="name">{related_bike.name.clone()}</div>
                            <div class="brand">{related_bike.brand.clone()}</div>
                            <div class="price">{related_bike.price_display()}</div>
                            <div class="actions">
                                <button
                                    class="btn secondary"
                                    on:click=move |_| state.open_details(open.clone())
                                >
                                    "View"
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
