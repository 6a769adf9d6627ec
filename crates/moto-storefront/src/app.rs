//! Root application component.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::components::{ChatWidget, Footer, NavBar};
use crate::pages::{
    AboutPage, CalculatorsPage, CartPage, CatalogPage, ComparePage, DetailsPage, HomePage,
    LaunchesPage, LoginPage, RentalsPage, SparesPage, WarrantyPage,
};
use crate::state::{Page, StoreState};

/// The application root: provides the shared state bundle, gates on
/// login, and dispatches the current page enum to its component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = StoreState::new();
    provide_context(state);

    view! {
        <Title text="MotoMart - Two-Wheeler Marketplace"/>
        <Show
            when=move || state.logged_in.get()
            fallback=|| view! { <LoginPage/> }
        >
            <NavBar/>
            <main>
                {move || match state.page.get() {
                    // Login renders outside the gate; inside it, fall
                    // back to home.
                    Page::Login | Page::Home => view! { <HomePage/> }.into_any(),
                    Page::Catalog => view! { <CatalogPage/> }.into_any(),
                    Page::Details => view! { <DetailsPage/> }.into_any(),
                    Page::Compare => view! { <ComparePage/> }.into_any(),
                    Page::Calculators => view! { <CalculatorsPage/> }.into_any(),
                    Page::Upcoming => view! { <LaunchesPage/> }.into_any(),
                    Page::Rentals => view! { <RentalsPage/> }.into_any(),
                    Page::Warranty => view! { <WarrantyPage/> }.into_any(),
                    Page::About => view! { <AboutPage/> }.into_any(),
                    Page::Spares => view! { <SparesPage/> }.into_any(),
                    Page::Cart => view! { <CartPage/> }.into_any(),
                }}
            </main>
            <Footer/>
            <ChatWidget/>
        </Show>
    }
}
