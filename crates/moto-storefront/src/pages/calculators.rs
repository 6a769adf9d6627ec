//! EMI and fuel cost calculators, tabbed on one page.

use leptos::prelude::*;
use moto_commerce::finance::{CITY_COMMUTE, HIGHWAY_TRAVEL};
use moto_commerce::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalcTab {
    Emi,
    Fuel,
}

#[component]
pub fn CalculatorsPage() -> impl IntoView {
    let tab = RwSignal::new(CalcTab::Emi);

    view! {
        <h1>"Calculators"</h1>
        <p class="page-intro">"Work out the monthly cost before you commit."</p>

        <div class="tabs">
            <button
                class=move || if tab.get() == CalcTab::Emi { "btn" } else { "btn secondary" }
                on:click=move |_| tab.set(CalcTab::Emi)
            >
                "EMI Calculator"
            </button>
            <button
                class=move || if tab.get() == CalcTab::Fuel { "btn" } else { "btn secondary" }
                on:click=move |_| tab.set(CalcTab::Fuel)
            >
                "Fuel Cost Calculator"
            </button>
        </div>

        {move || match tab.get() {
            CalcTab::Emi => view! { <EmiCalculator/> }.into_any(),
            CalcTab::Fuel => view! { <FuelCalculator/> }.into_any(),
        }}
    }
}

#[component]
fn EmiCalculator() -> impl IntoView {
    let defaults = LoanTerms::default();
    let principal = RwSignal::new(defaults.principal);
    let rate = RwSignal::new(defaults.annual_rate_pct);
    let tenure = RwSignal::new(defaults.tenure_months);

    let result = Memo::new(move |_| {
        LoanTerms::new(principal.get(), rate.get(), tenure.get()).calculate()
    });

    view! {
        <div class="calc">
            <div class="row">
                <label>
                    {move || {
                        format!(
                            "Loan Amount: {}",
                            Money::from_rupees(principal.get() as i64).display(),
                        )
                    }}
                </label>
                <input
                    type="range"
                    min="50000"
                    max="1000000"
                    step="10000"
                    prop:value=move || principal.get().to_string()
                    on:input:target=move |ev| {
                        principal.set(ev.target().value().parse().unwrap_or(250_000.0))
                    }
                />
            </div>
            <div class="row">
                <label>
                    {move || format!("Interest Rate: {:.1}% p.a.", rate.get())}
                </label>
                <input
                    type="range"
                    min="5"
                    max="20"
                    step="0.1"
                    prop:value=move || rate.get().to_string()
                    on:input:target=move |ev| {
                        rate.set(ev.target().value().parse().unwrap_or(9.5))
                    }
                />
            </div>
            <div class="row">
                <label>{move || format!("Tenure: {} months", tenure.get())}</label>
                <input
                    type="range"
                    min="6"
                    max="84"
                    step="6"
                    prop:value=move || tenure.get().to_string()
                    on:input:target=move |ev| {
                        tenure.set(ev.target().value().parse().unwrap_or(36))
                    }
                />
            </div>

            {move || match result.get() {
                Ok(breakdown) => view! {
                    <div class="results">
                        <div class="stat">
                            <div class="value">{breakdown.emi_display()}</div>
                            <div class="label">"Monthly EMI"</div>
                        </div>
                        <div class="stat">
                            <div class="value">{breakdown.interest_display()}</div>
                            <div class="label">"Total Interest"</div>
                        </div>
                        <div class="stat">
                            <div class="value">{breakdown.total_display()}</div>
                            <div class="label">"Total Payable"</div>
                        </div>
                    </div>
                }
                .into_any(),
                Err(err) => view! { <div class="error">{err.to_string()}</div> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn FuelCalculator() -> impl IntoView {
    let usage = RwSignal::new(FuelUsage::default());

    let result = Memo::new(move |_| usage.get().project());

    let preset_button = move |preset: FuelPreset| {
        view! {
            <button
                class="btn secondary"
                on:click=move |_| usage.update(|u| *u = u.with_preset(preset))
            >
                {preset.label}
            </button>
        }
    };

    view! {
        <div class="calc">
            <div class="tabs">
                {preset_button(CITY_COMMUTE)}
                {preset_button(HIGHWAY_TRAVEL)}
            </div>
            <div class="row">
                <label>
                    {move || {
                        format!("Daily Distance: {:.0} km", usage.get().daily_distance_km)
                    }}
                </label>
                <input
                    type="range"
                    min="5"
                    max="300"
                    step="5"
                    prop:value=move || usage.get().daily_distance_km.to_string()
                    on:input:target=move |ev| {
                        let value = ev.target().value().parse().unwrap_or(100.0);
                        usage.update(|u| u.daily_distance_km = value);
                    }
                />
            </div>
            <div class="row">
                <label>
                    {move || format!("Mileage: {:.0} km/l", usage.get().mileage_kmpl)}
                </label>
                <input
                    type="range"
                    min="10"
                    max="100"
                    step="1"
                    prop:value=move || usage.get().mileage_kmpl.to_string()
                    on:input:target=move |ev| {
                        let value = ev.target().value().parse().unwrap_or(35.0);
                        usage.update(|u| u.mileage_kmpl = value);
                    }
                />
            </div>
            <div class="row">
                <label>
                    {move || {
                        format!("Fuel Price: \u{20b9}{:.0} per liter", usage.get().price_per_liter)
                    }}
                </label>
                <input
                    type="range"
                    min="80"
                    max="140"
                    step="1"
                    prop:value=move || usage.get().price_per_liter.to_string()
                    on:input:target=move |ev| {
                        let value = ev.target().value().parse().unwrap_or(110.0);
                        usage.update(|u| u.price_per_liter = value);
                    }
                />
            </div>
            <div class="row">
                <label>
                    {move || format!("Riding Days per Month: {}", usage.get().working_days)}
                </label>
                <input
                    type="range"
                    min="1"
                    max="31"
                    step="1"
                    prop:value=move || usage.get().working_days.to_string()
                    on:input:target=move |ev| {
                        let value = ev.target().value().parse().unwrap_or(25);
                        usage.update(|u| u.working_days = value);
                    }
                />
            </div>

            {move || match result.get() {
                Ok(cost) => view! {
                    <div class="results">
                        <div class="stat">
                            <div class="value">{cost.daily_display()}</div>
                            <div class="label">"Per Day"</div>
                        </div>
                        <div class="stat">
                            <div class="value">{cost.monthly_display()}</div>
                            <div class="label">"Per Month"</div>
                        </div>
                        <div class="stat">
                            <div class="value">{cost.yearly_display()}</div>
                            <div class="label">"Per Year"</div>
                        </div>
                    </div>
                }
                .into_any(),
                Err(err) => view! { <div class="error">{err.to_string()}</div> }.into_any(),
            }}
        </div>
    }
}
