//! Home page: hero picks, stats, and segment shelves.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::data;
use crate::state::{use_store, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_store();

    let sport = data::shelf(&[Segment::Sport]);
    let cruisers = data::shelf(&[Segment::Cruiser, Segment::Classic]);
    let electric = data::shelf(&[Segment::Electric]);

    view! {
        <div class="hero">
            <h1>"Find Your Perfect Ride"</h1>
            <p>
                "Motorcycles, scooters, spare parts and rentals, with EMI and "
                "fuel-cost calculators to keep the decision honest."
            </p>
            <button class="btn" on:click=move |_| state.navigate(Page::Catalog)>
                "Browse Bikes"
            </button>
        </div>

        <div class="grid">
            {data::hero_picks()
                .into_iter()
                .map(|bike| view! { <ShelfCard bike=bike/> })
                .collect_view()}
        </div>

        <div class="stats">
            <div class="stat">
                <div class="value">"30+"</div>
                <div class="label">"Models Listed"</div>
            </div>
            <div class="stat">
                <div class="value">"6"</div>
                <div class="label">"Rental Cities"</div>
            </div>
            <div class="stat">
                <div class="value">"50,000+"</div>
                <div class="label">"Happy Customers"</div>
            </div>
            <div class="stat">
                <div class="value">"200+"</div>
                <div class="label">"Service Centers"</div>
            </div>
        </div>

        <Shelf title="Sport Bikes" bikes=sport/>
        <Shelf title="Cruisers & Classics" bikes=cruisers/>
        <Shelf title="Electric Rides" bikes=electric/>
    }
}

#[component]
fn Shelf(title: &'static str, bikes: Vec<Bike>) -> impl IntoView {
    view! {
        <h2>{title}</h2>
        <div class="grid">
            {bikes
                .into_iter()
                .map(|bike| view! { <ShelfCard bike=bike/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ShelfCard(bike: Bike) -> impl IntoView {
    let state = use_store();

    let details_bike = bike.clone();
    let cart_bike = bike.clone();

    view! {
        <div class="card">
            <img src=bike.image.clone() alt=bike.name.clone()/>
            <div class="name">{bike.name.clone()}</div>
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
                <button class="btn" on:click=move |_| state.add_bike_to_cart(&cart_bike)>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
