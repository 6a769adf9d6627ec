//! Warranty plans, support channels, and FAQs. Entirely static.

use leptos::prelude::*;

struct WarrantyPlan {
    name: &'static str,
    price: &'static str,
    duration: &'static str,
    covers: &'static [&'static str],
}

const PLANS: [WarrantyPlan; 3] = [
    WarrantyPlan {
        name: "Basic Warranty",
        price: "Free",
        duration: "2 Years",
        covers: &[
            "Engine and gearbox defects",
            "Electrical system faults",
            "Free service for first year",
        ],
    },
    WarrantyPlan {
        name: "Extended Warranty",
        price: "\u{20b9}15,000",
        duration: "5 Years",
        covers: &[
            "Everything in Basic",
            "Wear-and-tear components",
            "Roadside assistance",
            "Two free services per year",
        ],
    },
    WarrantyPlan {
        name: "Premium Care",
        price: "\u{20b9}25,000",
        duration: "7 Years",
        covers: &[
            "Everything in Extended",
            "Accidental damage cover",
            "Pickup and drop for service",
            "Dedicated support line",
        ],
    },
];

struct SupportChannel {
    name: &'static str,
    detail: &'static str,
    hours: &'static str,
}

const CHANNELS: [SupportChannel; 4] = [
    SupportChannel {
        name: "Phone Support",
        detail: "1800-MOTOMART",
        hours: "Mon-Sat, 9 AM - 9 PM",
    },
    SupportChannel {
        name: "Email",
        detail: "support@motomart.example",
        hours: "Replies within 24 hours",
    },
    SupportChannel {
        name: "Live Chat",
        detail: "Chat widget, bottom right",
        hours: "Always on",
    },
    SupportChannel {
        name: "Service Centers",
        detail: "200+ across India",
        hours: "Walk-in, Mon-Sat",
    },
];

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 4] = [
    Faq {
        question: "What does the basic warranty cover?",
        answer: "Manufacturing defects in the engine, gearbox, and electrical \
                 system for two years from purchase, with labour included.",
    },
    Faq {
        question: "Can I buy extended warranty later?",
        answer: "Yes, any time within the first year of ownership. After that \
                 the bike needs an inspection at a service center first.",
    },
    Faq {
        question: "Is the warranty transferable if I sell the bike?",
        answer: "Basic and Extended plans transfer to the new owner at no \
                 cost. Premium Care requires a one-time transfer fee.",
    },
    Faq {
        question: "What voids the warranty?",
        answer: "Aftermarket engine or electrical modifications, racing use, \
                 and servicing outside authorized centers.",
    },
];

#[component]
pub fn WarrantyPage() -> impl IntoView {
    view! {
        <h1>"Warranty & Support"</h1>
        <p class="page-intro">"Coverage options and how to reach us."</p>

        <h2>"Plans"</h2>
        <div class="grid">
            {PLANS
                .iter()
                .map(|plan| {
                    view! {
                        <div class="card">
                            <div class="name">{plan.name}</div>
                            <div class="price">{plan.price}</div>
                            <div class="meta">{plan.duration}</div>
                            <ul>
                                {plan
                                    .covers
                                    .iter()
                                    .map(|item| view! { <li>{*item}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <h2>"Get Help"</h2>
        <div class="grid">
            {CHANNELS
                .iter()
                .map(|channel| {
                    view! {
                        <div class="card">
                            <div class="name">{channel.name}</div>
                            <div class="meta">{channel.detail}</div>
                            <div class="meta">{channel.hours}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <h2>"Frequently Asked Questions"</h2>
        {FAQS
            .iter()
            .map(|faq| {
                view! {
                    <details>
                        <summary>{faq.question}</summary>
                        <p>{faq.answer}</p>
                    </details>
                }
            })
            .collect_view()}
    }
}
