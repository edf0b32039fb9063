//! Enquiry Form Component
//!
//! Public contact form feeding the admin Leads table. The budget
//! options follow the selected purpose and property requirement; the
//! phone number is validated client-side before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewLead};
use crate::filters::{enquiry_budget_options, phone_is_valid, PROPERTY_TYPES};
use crate::models::Purpose;

const PURPOSES: &[Purpose] = &[Purpose::Buy, Purpose::Sell, Purpose::Rent, Purpose::Lease];

#[component]
pub fn EnquiryForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (purpose, set_purpose) = signal(Purpose::Buy);
    let (requirements, set_requirements) = signal(String::new());
    let (budget, set_budget) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    // A stale budget from the previous purpose/requirement pair is cleared
    let sync_budget = move |purpose: Purpose, requirements: &str| {
        let options = enquiry_budget_options(purpose, requirements);
        if !options.contains(&budget.get().as_str()) {
            set_budget.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() {
            set_error.set("Please enter your name".into());
            return;
        }
        if !phone_is_valid(&phone.get()) {
            set_error.set("Please enter a valid phone number".into());
            return;
        }
        set_error.set(String::new());

        spawn_local(async move {
            let result = api::submit_enquiry(&NewLead {
                name: name.get().trim(),
                phone: phone.get().trim(),
                email: email.get().trim(),
                purpose: purpose.get().label(),
                requirements: &requirements.get(),
                budget: &budget.get(),
            })
            .await;
            match result {
                Ok(()) => {
                    set_name.set(String::new());
                    set_phone.set(String::new());
                    set_email.set(String::new());
                    set_requirements.set(String::new());
                    set_budget.set(String::new());
                    set_submitted.set(true);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Enquiry submission failed: {err}").into());
                    set_error.set("Something went wrong, please try again".into());
                }
            }
        });
    };

    view! {
        <form class="enquiry-form" on:submit=on_submit>
            <h2>"Quick Enquiry"</h2>

            <Show when=move || submitted.get()>
                <p class="form-success">"Thank you! We will get back to you shortly."</p>
            </Show>

            <input
                type="text"
                placeholder="Your Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="tel"
                placeholder="Phone Number"
                prop:value=move || phone.get()
                on:input=move |ev| set_phone.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />

            <select
                prop:value=move || purpose.get().label()
                on:change=move |ev| {
                    let next = match event_target_value(&ev).as_str() {
                        "Sell" => Purpose::Sell,
                        "Rent" => Purpose::Rent,
                        "Lease" => Purpose::Lease,
                        _ => Purpose::Buy,
                    };
                    set_purpose.set(next);
                    sync_budget(next, &requirements.get());
                }
            >
                {PURPOSES
                    .iter()
                    .map(|p| view! { <option value=p.label()>{p.label()}</option> })
                    .collect_view()}
            </select>

            <select
                prop:value=move || requirements.get()
                on:change=move |ev| {
                    let next = event_target_value(&ev);
                    set_requirements.set(next.clone());
                    sync_budget(purpose.get(), &next);
                }
            >
                <option value="">"Requirement"</option>
                {PROPERTY_TYPES
                    .iter()
                    .map(|t| view! { <option value=*t>{*t}</option> })
                    .collect_view()}
            </select>

            // Sell enquiries carry no budget
            <Show when=move || !enquiry_budget_options(purpose.get(), &requirements.get()).is_empty()>
                <select
                    prop:value=move || budget.get()
                    on:change=move |ev| set_budget.set(event_target_value(&ev))
                >
                    <option value="">"Budget"</option>
                    {move || {
                        enquiry_budget_options(purpose.get(), &requirements.get())
                            .iter()
                            .map(|label| view! { <option value=*label>{*label}</option> })
                            .collect_view()
                    }}
                </select>
            </Show>

            <Show when=move || !error.get().is_empty()>
                <p class="form-error">{move || error.get()}</p>
            </Show>

            <button type="submit">"Submit"</button>
        </form>
    }
}
