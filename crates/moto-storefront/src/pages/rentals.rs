//! Rentals page: period selector, location and fuel filters.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::data;

#[component]
pub fn RentalsPage() -> impl IntoView {
    let listings = StoredValue::new(data::rentals());

    let period = RwSignal::new(RentalPeriod::default());
    let location = RwSignal::new(String::from("all"));
    let fuel = RwSignal::new(String::from("all"));

    let results = Memo::new(move |_| {
        let selected_location = location.get();
        let selected_fuel = FuelType::from_str(&fuel.get());
        listings.with_value(|all| {
            all.iter()
                .filter(|r| selected_location == "all" || r.location == selected_location)
                .filter(|r| selected_fuel.map_or(true, |f| r.fuel_type == f))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <h1>"Rent a Ride"</h1>
        <p class="page-intro">"Hourly to monthly, across six cities."</p>

        <div class="filters">
            <div class="tabs">
                {RentalPeriod::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <button
                                class=move || {
                                    if period.get() == p { "btn" } else { "btn secondary" }
                                }
                                on:click=move |_| period.set(p)
                            >
                                {p.display_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div>
                <label>"Location"</label>
                <select on:change:target=move |ev| location.set(ev.target().value())>
                    <option value="all">"All Locations"</option>
                    {data::RENTAL_LOCATIONS
                        .into_iter()
                        .map(|city| {
                            view! {
                                <option
                                    value=city
                                    selected=move || location.get() == city
                                >
                                    {city}
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
                    {[FuelType::Petrol, FuelType::Electric]
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
        </div>

        <div class="result-count">
            {move || {
                format!(
                    "Showing {} of {} rentals",
                    results.get().len(),
                    listings.with_value(|all| all.len()),
                )
            }}
        </div>

        <div class="grid">
            {move || {
                let p = period.get();
                results
                    .get()
                    .into_iter()
                    .map(|rental| view! { <RentalCard rental=rental period=p/> })
                    .collect_view()
            }}
        </div>

        <Show when=move || results.get().is_empty()>
            <div class="empty-state">
                <h2>"No rentals found"</h2>
                <p>"Try another location or fuel type."</p>
            </div>
        </Show>
    }
}

#[component]
fn RentalCard(rental: RentalListing, period: RentalPeriod) -> impl IntoView {
    let availability = if rental.available {
        view! { <span class="badge green">"Available"</span> }
    } else {
        view! { <span class="badge red">"Booked Out"</span> }
    };

    view! {
        <div class="card">
            <img src=rental.image.clone() alt=rental.name.clone()/>
            <div class="name">{rental.name.clone()}</div>
            <div class="brand">{rental.brand.clone()}</div>
            {availability}
            <div class="price">{rental.rate_display(period)}</div>
            <div class="meta">
                {format!("\u{2605} {:.1} \u{b7} {}", rental.rating, rental.location)}
            </div>
            <ul>
                {rental
                    .features
                    .iter()
                    .map(|feature| view! { <li>{feature.clone()}</li> })
                    .collect_view()}
            </ul>
            <button class="btn" disabled=!rental.available>
                {if rental.available { "Book Now" } else { "Unavailable" }}
            </button>
        </div>
    }
}
