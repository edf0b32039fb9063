//! Admin Leads Page
//!
//! Table of enquiry-form contact requests: date filter, mark/unmark
//! checkbox, inline delete confirmation, fixed-size pagination.

use collection_view::{CollectionSignal, ADMIN_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DateFilter, Pager, RowDeleteButton};
use crate::models::Lead;

#[component]
pub fn LeadsPage() -> impl IntoView {
    let collection = CollectionSignal::<Lead>::new(ADMIN_PAGE_SIZE);
    let (loading, set_loading) = signal(true);

    // Load on mount; a failed fetch leaves the collection empty
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_leads().await {
                Ok(leads) => collection.load_done(leads),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error fetching contact requests: {err}").into(),
                    );
                    collection.load_done(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="admin-page">
            <div class="admin-page-header">
                <h1>"Leads"</h1>
                <DateFilter on_change=move |date| collection.set_date_filter(date) />
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && collection.filtered_len() == 0>
                <p class="empty-state">"No Leads found."</p>
            </Show>

            <Show when=move || { collection.filtered_len() > 0 }>
                <div class="table-scroll">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Requirements"</th>
                                <th>"Budget"</th>
                                <th>"Requested At"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || collection.visible()
                                key=|lead| lead.id.clone()
                                children=move |lead: Lead| {
                                    let mark_id = lead.id.clone();
                                    let delete_id = lead.id.clone();
                                    view! {
                                        <tr>
                                            <td>{lead.name.clone()}</td>
                                            <td>
                                                <a href=format!("mailto:{}", lead.email)>
                                                    {lead.email.clone()}
                                                </a>
                                            </td>
                                            <td>{lead.phone.clone()}</td>
                                            <td>{lead.requirements.clone()}</td>
                                            <td>{lead.budget.clone()}</td>
                                            <td>{lead.created_at.format("%d %b %Y, %H:%M").to_string()}</td>
                                            <td class="row-actions">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=lead.marked
                                                    on:change=move |ev| {
                                                        let marked = event_target_checked(&ev);
                                                        let id = mark_id.clone();
                                                        spawn_local(async move {
                                                            match api::set_lead_marked(&id, marked).await {
                                                                Ok(updated) => collection.apply_patch(updated),
                                                                Err(err) => web_sys::console::error_1(
                                                                    &format!("Error updating lead: {err}").into(),
                                                                ),
                                                            }
                                                        });
                                                    }
                                                />
                                                <RowDeleteButton
                                                    entity="lead"
                                                    on_confirm=move |_| {
                                                        let id = delete_id.clone();
                                                        spawn_local(async move {
                                                            match api::delete_lead(&id).await {
                                                                Ok(()) => collection.apply_remove(&id),
                                                                Err(err) => web_sys::console::error_1(
                                                                    &format!("Error deleting lead: {err}").into(),
                                                                ),
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Pager
                    current=Signal::derive(move || collection.current_page())
                    total=Signal::derive(move || collection.total_pages())
                    on_page=move |page| collection.set_page(page)
                />
            </Show>
        </div>
    }
}
