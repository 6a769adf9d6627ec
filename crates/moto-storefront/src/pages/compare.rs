//! Side-by-side comparison table.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::state::{use_store, Page};

#[component]
pub fn ComparePage() -> impl IntoView {
    let state = use_store();

    let bikes = move || state.compare.with(|c| c.bikes().to_vec());

    view! {
        <h1>"Compare Bikes"</h1>
        <p class="page-intro">
            {move || {
                format!(
                    "Comparing {} of {} bikes.",
                    state.compare.with(|c| c.len()),
                    MAX_COMPARE,
                )
            }}
        </p>

        <Show
            when=move || !state.compare.with(|c| c.is_empty())
            fallback=move || {
                view! {
                    <div class="empty-state">
                        <h2>"Nothing to compare yet"</h2>
                        <p>"Add up to three bikes from the catalog to see them side by side."</p>
                        <button class="btn" on:click=move |_| state.navigate(Page::Catalog)>
                            "Browse Bikes"
                        </button>
                    </div>
                }
            }
        >
            <table class="compare-table">
                <thead>
                    <tr>
                        <th></th>
                        {move || {
                            bikes()
                                .into_iter()
                                .map(|bike| {
                                    let id = bike.id.clone();
                                    view! {
                                        <th>
                                            <img src=bike.image.clone() alt=bike.name.clone()/>
                                            <div>{bike.name.clone()}</div>
                                            <button
                                                class="btn danger"
                                                on:click=move |_| {
                                                    state.remove_from_compare(&id)
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </th>
                                    }
                                })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    <CompareRow label="Price" value=|b: &Bike| b.price_display()/>
                    <CompareRow label="Brand" value=|b: &Bike| b.brand.clone()/>
                    <CompareRow label="Mileage" value=|b: &Bike| b.mileage_display()/>
                    <CompareRow
                        label="Fuel Type"
                        value=|b: &Bike| b.fuel_type.display_name().to_string()
                    />
                    <CompareRow label="Engine" value=|b: &Bike| b.engine.displacement.clone()/>
                    <CompareRow label="Power" value=|b: &Bike| b.engine.power.clone()/>
                    <CompareRow label="Torque" value=|b: &Bike| b.engine.torque.clone()/>
                    <CompareRow label="Max RPM" value=|b: &Bike| b.engine.max_rpm.clone()/>
                    <CompareRow
                        label="Cylinders"
                        value=|b: &Bike| b.engine.cylinders.to_string()
                    />
                    <CompareRow
                        label="Segment"
                        value=|b: &Bike| b.segment.display_name().to_string()
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn CompareRow(label: &'static str, value: fn(&Bike) -> String) -> impl IntoView {
    let state = use_store();

    view! {
        <tr>
            <th>{label}</th>
            {move || {
                state
                    .compare
                    .with(|c| c.bikes().iter().map(value).collect::<Vec<_>>())
                    .into_iter()
                    .map(|cell| view! { <td>{cell}</td> })
                    .collect_view()
            }}
        </tr>
    }
}
