//! Public Property Listing
//!
//! One component serves the Buy / Rent / Lease pages: full fetch of the
//! property collection, client-side search / type / budget filters and
//! fixed-size pagination. Changing any filter input resets to page 1;
//! changing the type also clears the budget selection, since the budget
//! options depend on it.

use collection_view::{clamp_page, page_slice, total_pages, LISTING_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Pager;
use crate::filters::{budget_options, ListingFilter, PROPERTY_TYPES};
use crate::models::{Property, Purpose};

#[component]
pub fn PropertyList(purpose: Purpose) -> impl IntoView {
    let (properties, set_properties) = signal(Vec::<Property>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (property_type, set_property_type) = signal(String::new());
    let (budget, set_budget) = signal(String::new());
    let (page, set_page) = signal(1usize);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_properties().await {
                Ok(fetched) => set_properties.set(fetched),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch properties: {err}").into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let filter = ListingFilter {
            search: search.get(),
            property_type: property_type.get(),
            budget: budget.get(),
        };
        properties
            .get()
            .into_iter()
            .filter(|property| filter.matches(purpose, property))
            .collect::<Vec<_>>()
    });
    let total = Memo::new(move |_| total_pages(filtered.get().len(), LISTING_PAGE_SIZE));
    let current = Memo::new(move |_| clamp_page(page.get(), total.get()));
    let visible = move || {
        let rows = filtered.get();
        page_slice(&rows, current.get(), LISTING_PAGE_SIZE).to_vec()
    };

    let heading = match purpose {
        Purpose::Buy => "Buy Property",
        Purpose::Rent => "Rent Property",
        Purpose::Lease => "Lease Property",
        Purpose::Sell => "Sell Property",
    };

    view! {
        <div class="listing-page">
            <h1>{heading}</h1>

            <div class="listing-filters">
                <input
                    type="text"
                    placeholder="Search by location, title, type or builder..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />

                <select
                    prop:value=move || property_type.get()
                    on:change=move |ev| {
                        set_property_type.set(event_target_value(&ev));
                        // the budget options belong to the old type
                        set_budget.set(String::new());
                        set_page.set(1);
                    }
                >
                    <option value="">"Property Type"</option>
                    {PROPERTY_TYPES
                        .iter()
                        .map(|t| view! { <option value=*t>{*t}</option> })
                        .collect_view()}
                </select>

                <select
                    prop:value=move || budget.get()
                    on:change=move |ev| {
                        set_budget.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                >
                    <option value="">"Budget"</option>
                    {move || {
                        budget_options(purpose, &property_type.get())
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading properties..."</div>
            </Show>

            <Show when=move || !loading.get() && filtered.get().is_empty()>
                <p class="empty-state">"No properties found."</p>
            </Show>

            <div class="property-grid">
                <For
                    each=visible
                    key=|property| property.id.clone()
                    children=move |property: Property| {
                        view! {
                            <div class="property-card">
                                <div class="property-card-image">
                                    {property
                                        .images
                                        .first()
                                        .map(|src| {
                                            view! {
                                                <img src=src.clone() alt=property.title.clone() />
                                            }
                                        })}
                                </div>
                                <h3>{property.title.clone()}</h3>
                                <p class="property-location">{property.location.clone()}</p>
                                <p class="property-price">{format_price(property.price)}</p>
                                <ul class="property-facts">
                                    <li>{property.property_type.clone()}</li>
                                    {property
                                        .bedrooms
                                        .clone()
                                        .map(|b| view! { <li>{b} " Beds"</li> })}
                                    {property
                                        .bathrooms
                                        .clone()
                                        .map(|b| view! { <li>{b} " Baths"</li> })}
                                    {property
                                        .area_sqft
                                        .clone()
                                        .map(|a| view! { <li>{a} " sqft"</li> })}
                                </ul>
                                <span class="property-purpose">{property.purpose.label()}</span>
                            </div>
                        }
                    }
                />
            </div>

            <Pager
                current=current
                total=total
                on_page=move |next| set_page.set(next)
            />
        </div>
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.fract() == 0.0 => format!("₹{}", p as i64),
        Some(p) => format!("₹{p}"),
        None => "Price on request".to_string(),
    }
}
