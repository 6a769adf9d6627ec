//! About page. Entirely static.

use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("30+", "Models Listed"),
    ("6", "Rental Cities"),
    ("50,000+", "Happy Customers"),
    ("200+", "Service Centers"),
];

const VALUES: [(&str, &str); 4] = [
    (
        "Transparent Pricing",
        "Ex-showroom prices, GST, and shipping spelled out before checkout. \
         No dealer markups hiding in the fine print.",
    ),
    (
        "Honest Numbers",
        "EMI and fuel-cost calculators built in, so the monthly cost is on \
         the table before the test ride.",
    ),
    (
        "Every Kind of Rider",
        "Commuter scooters to liter-class sport bikes, petrol and electric, \
         owned or rented by the hour.",
    ),
    (
        "After the Sale",
        "Genuine spares, warranty plans, and a service network that does not \
         disappear once the invoice is paid.",
    ),
];

const TEAM: [(&str, &str); 3] = [
    ("Arjun Mehta", "Founder & CEO"),
    ("Priya Sharma", "Head of Operations"),
    ("Rahul Verma", "Head of Engineering"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <h1>"About MotoMart"</h1>
        <p class="page-intro">
            "MotoMart started in 2020 with a simple complaint: buying a \
             two-wheeler in India meant three dealership visits, a price that \
             moved every time, and a loan quote scribbled on the back of a \
             brochure. We put the whole thing on one page instead."
        </p>

        <div class="stats">
            {STATS
                .iter()
                .map(|(value, label)| {
                    view! {
                        <div class="stat">
                            <div class="value">{*value}</div>
                            <div class="label">{*label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <h2>"What We Stand For"</h2>
        <div class="grid">
            {VALUES
                .iter()
                .map(|(title, body)| {
                    view! {
                        <div class="card">
                            <div class="name">{*title}</div>
                            <p>{*body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <h2>"The Team"</h2>
        <div class="grid">
            {TEAM
                .iter()
                .map(|(name, role)| {
                    view! {
                        <div class="card">
                            <div class="name">{*name}</div>
                            <div class="meta">{*role}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
