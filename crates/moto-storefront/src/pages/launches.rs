//! Upcoming launches with countdowns.

use leptos::prelude::*;
use moto_commerce::prelude::*;

use crate::data;

#[component]
pub fn LaunchesPage() -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let launches = data::upcoming_launches();

    let total = launches.len();
    let electric = launches.iter().filter(|l| l.electric).count();
    let booking_open = launches
        .iter()
        .filter(|l| l.status == LaunchStatus::PreLaunch)
        .count();

    view! {
        <h1>"Upcoming Launches"</h1>
        <p class="page-intro">"The models about to hit Indian showrooms."</p>

        <div class="stats">
            <div class="stat">
                <div class="value">{total.to_string()}</div>
                <div class="label">"Launches Tracked"</div>
            </div>
            <div class="stat">
                <div class="value">{electric.to_string()}</div>
                <div class="label">"Electric Models"</div>
            </div>
            <div class="stat">
                <div class="value">{booking_open.to_string()}</div>
                <div class="label">"Bookings Open"</div>
            </div>
        </div>

        <div class="grid">
            {launches
                .into_iter()
                .map(|launch| view! { <LaunchCard launch=launch today=today/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn LaunchCard(launch: UpcomingLaunch, today: chrono::NaiveDate) -> impl IntoView {
    let badge_class = match launch.status {
        LaunchStatus::ComingSoon => "badge green",
        LaunchStatus::PreLaunch => "badge yellow",
        LaunchStatus::Announced => "badge red",
    };

    view! {
        <div class="card">
            <img src=launch.image.clone() alt=launch.name.clone()/>
            <div class="name">
                {launch.name.clone()}
                <Show when={
                    let electric = launch.electric;
                    move || electric
                }>
                    " "
                    <span class="badge green">"EV"</span>
                </Show>
            </div>
            <div class="brand">{launch.brand.clone()}</div>
            <span class=badge_class>{launch.status.display_name()}</span>
            <div class="price">
                {format!("Expected {}", launch.expected_price.display())}
            </div>
            <div class="meta">
                {format!(
                    "{} \u{b7} {}",
                    launch.launch_date.format("%d %b %Y"),
                    launch.countdown_display(today),
                )}
            </div>
            <p>{launch.description.clone()}</p>
            <ul>
                {launch
                    .features
                    .iter()
                    .map(|feature| view! { <li>{feature.clone()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
