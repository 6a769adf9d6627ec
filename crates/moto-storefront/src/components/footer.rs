//! Site footer.

use leptos::prelude::*;

use crate::state::{use_store, Page};

const SHOP_LINKS: [Page; 4] = [Page::Catalog, Page::Spares, Page::Rentals, Page::Upcoming];
const SUPPORT_LINKS: [Page; 3] = [Page::Calculators, Page::Warranty, Page::About];

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_store();

    let link = move |page: Page| {
        view! {
            <a on:click=move |_| state.navigate(page)>{page.title()}</a>
        }
    };

    view! {
        <footer>
            <div class="cols">
                <div>
                    <h4>"MotoMart"</h4>
                    <p>
                        "Buying, comparing, renting and servicing bikes, scooters "
                        "and EVs under one roof."
                    </p>
                </div>
                <div>
                    <h4>"Shop"</h4>
                    {SHOP_LINKS.into_iter().map(link).collect_view()}
                </div>
                <div>
                    <h4>"Support"</h4>
                    {SUPPORT_LINKS.into_iter().map(link).collect_view()}
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <p>"1800-MOTOMART"</p>
                    <p>"support@motomart.example"</p>
                    <p>"Mon - Sat, 9 AM - 9 PM"</p>
                </div>
            </div>
            <div class="fine">
                <p>"Prices are ex-showroom and indicative. Nothing here leaves your browser."</p>
            </div>
        </footer>
    }
}
