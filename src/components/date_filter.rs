//! Date Filter Component
//!
//! Date input for the admin tables; emits the parsed calendar date,
//! or None when the input is cleared.

use chrono::NaiveDate;
use leptos::prelude::*;

#[component]
pub fn DateFilter(#[prop(into)] on_change: Callback<Option<NaiveDate>>) -> impl IntoView {
    view! {
        <div class="date-filter">
            <label for="filter-date">"Filter by Date:"</label>
            <input
                id="filter-date"
                type="date"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    on_change.run(value.parse::<NaiveDate>().ok());
                }
            />
        </div>
    }
}
