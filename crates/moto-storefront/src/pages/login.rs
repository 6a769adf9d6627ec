//! Login gate.
//!
//! There is no account system; any non-empty credentials open the
//! store. The gate exists so logout has somewhere to land.

use leptos::prelude::*;

use crate::state::use_store;

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_store();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let incomplete =
        move || email.with(|e| e.trim().is_empty()) || password.with(|p| p.trim().is_empty());

    view! {
        <div class="login-wrap">
            <div class="login-card">
                <h1>"MotoMart"</h1>
                <p class="page-intro">"Sign in to browse bikes, spares and rentals."</p>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input:target=move |ev| email.set(ev.target().value())
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input:target=move |ev| password.set(ev.target().value())
                />
                <button
                    class="btn"
                    disabled=incomplete
                    on:click=move |_| state.login()
                >
                    "Sign In"
                </button>
            </div>
        </div>
    }
}
