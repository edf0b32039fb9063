//! Admin Brochure Leads Page
//!
//! Table of name/phone pairs captured by the brochure download modal.

use collection_view::{CollectionSignal, ADMIN_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DateFilter, Pager, RowDeleteButton};
use crate::models::BrochureLead;

#[component]
pub fn BrochureLeadsPage() -> impl IntoView {
    let collection = CollectionSignal::<BrochureLead>::new(ADMIN_PAGE_SIZE);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_brochure_leads().await {
                Ok(leads) => collection.load_done(leads),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error fetching brochure leads: {err}").into(),
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
                <h1>"Brochure Leads"</h1>
                <DateFilter on_change=move |date| collection.set_date_filter(date) />
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && collection.filtered_len() == 0>
                <p class="empty-state">"No Brochure Leads found."</p>
            </Show>

            <Show when=move || { collection.filtered_len() > 0 }>
                <div class="table-scroll">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Phone"</th>
                                <th>"Requested At"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || collection.visible()
                                key=|lead| lead.id.clone()
                                children=move |lead: BrochureLead| {
                                    let mark_id = lead.id.clone();
                                    let delete_id = lead.id.clone();
                                    view! {
                                        <tr>
                                            <td>{lead.name.clone()}</td>
                                            <td>{lead.phone.clone()}</td>
                                            <td>{lead.created_at.format("%d %b %Y, %H:%M").to_string()}</td>
                                            <td class="row-actions">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=lead.marked
                                                    on:change=move |ev| {
                                                        let marked = event_target_checked(&ev);
                                                        let id = mark_id.clone();
                                                        spawn_local(async move {
                                                            match api::set_brochure_lead_marked(&id, marked).await {
                                                                Ok(updated) => collection.apply_patch(updated),
                                                                Err(err) => web_sys::console::error_1(
                                                                    &format!("Error updating brochure lead: {err}").into(),
                                                                ),
                                                            }
                                                        });
                                                    }
                                                />
                                                <RowDeleteButton
                                                    entity="brochure lead"
                                                    on_confirm=move |_| {
                                                        let id = delete_id.clone();
                                                        spawn_local(async move {
                                                            match api::delete_brochure_lead(&id).await {
                                                                Ok(()) => collection.apply_remove(&id),
                                                                Err(err) => web_sys::console::error_1(
                                                                    &format!("Error deleting brochure lead: {err}").into(),
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
