//! Top navigation bar.

use leptos::prelude::*;

use crate::state::{use_store, Page};

/// Pages linked directly from the bar, in display order.
const NAV_PAGES: [Page; 8] = [
    Page::Home,
    Page::Catalog,
    Page::Spares,
    Page::Rentals,
    Page::Upcoming,
    Page::Calculators,
    Page::Warranty,
    Page::About,
];

#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_store();

    view! {
        <nav class="nav">
            <span class="brand" on:click=move |_| state.navigate(Page::Home)>
                "MotoMart"
            </span>
            {NAV_PAGES
                .into_iter()
                .map(|page| {
                    view! {
                        <a
                            class:active=move || state.page.get() == page
                            on:click=move |_| state.navigate(page)
                        >
                            {page.title()}
                        </a>
                    }
                })
                .collect_view()}
            <span class="spacer"></span>
            <button class="badge-btn" on:click=move |_| state.navigate(Page::Compare)>
                "Compare"
                <Show when=move || !state.compare.with(|c| c.is_empty())>
                    <span class="count">
                        {move || state.compare.with(|c| c.len()).to_string()}
                    </span>
                </Show>
            </button>
            <button class="badge-btn" on:click=move |_| state.navigate(Page::Cart)>
                "Cart"
                <Show when=move || !state.cart.with(|c| c.is_empty())>
                    <span class="count">
                        {move || state.cart.with(|c| c.item_count()).to_string()}
                    </span>
                </Show>
            </button>
            <button class="badge-btn" on:click=move |_| state.logout()>
                "Logout"
            </button>
        </nav>
    }
}
