//! MotoMart storefront entry point.
//!
//! A fully client-side rendering of the marketplace: static catalogs,
//! reactive cart and compare state, and no server round-trips. Built
//! with Trunk against `index.html`.

mod app;
mod components;
mod data;
mod pages;
mod state;

use app::App;
use leptos::mount::mount_to_body;

fn main() {
    // Panic hook first, so startup failures reach the console readable.
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
