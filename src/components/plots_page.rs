//! Admin Plot Inquiries Page
//!
//! Table of plot inquiries; the widest of the lead tables (user type,
//! plot size, location and free-text message per row).

use collection_view::{CollectionSignal, ADMIN_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DateFilter, Pager, RowDeleteButton};
use crate::models::PlotInquiry;

#[component]
pub fn PlotsPage() -> impl IntoView {
    let collection = CollectionSignal::<PlotInquiry>::new(ADMIN_PAGE_SIZE);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_plot_inquiries().await {
                Ok(inquiries) => collection.load_done(inquiries),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error fetching plot inquiries: {err}").into(),
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
                <h1>"Plots"</h1>
                <DateFilter on_change=move |date| collection.set_date_filter(date) />
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && collection.filtered_len() == 0>
                <p class="empty-state">"No Plot Inquiries found."</p>
            </Show>

            <Show when=move || { collection.filtered_len() > 0 }>
                <div class="table-scroll">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Phone"</th>
                                <th>"Email"</th>
                                <th>"User Type"</th>
                                <th>"Plot Size"</th>
                                <th>"Location"</th>
                                <th>"Message"</th>
                                <th>"Requested At"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || collection.visible()
                                key=|inquiry| inquiry.id.clone()
                                children=move |inquiry: PlotInquiry| {
                                    let mark_id = inquiry.id.clone();
                                    let delete_id = inquiry.id.clone();
                                    view! {
                                        <tr>
                                            <td>{inquiry.name.clone()}</td>
                                            <td>{inquiry.phone.clone()}</td>
                                            <td>
                                                <a href=format!("mailto:{}", inquiry.email)>
                                                    {inquiry.email.clone()}
                                                </a>
                                            </td>
                                            <td>{inquiry.user_type.clone()}</td>
                                            <td>{inquiry.plot_size.clone()}</td>
                                            <td>{inquiry.location.clone()}</td>
                                            <td class="message-cell">{inquiry.message.clone()}</td>
                                            <td>{inquiry.created_at.format("%d %b %Y, %H:%M").to_string()}</td>
                                            <td class="row-actions">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=inquiry.marked
                                                    on:change=move |ev| {
                                                        let marked = event_target_checked(&ev);
                                                        let id = mark_id.clone();
                                                        spawn_local(async move {
                                                            // This endpoint answers with the updated
                                                            // record wrapped in a data envelope
                                                            match api::set_plot_inquiry_marked(&id, marked).await {
                                                                Ok(updated) => collection.apply_patch(updated),
                                                                Err(err) => web_sys::console::error_1(
                                                                    &format!("Error updating plot inquiry: {err}").into(),
                                                                ),
                                                            }
                                                        });
                                                    }
                                                />
                                                <RowDeleteButton
                                                    entity="plot inquiry"
                                                    on_confirm=move |_| {
                                                        let id = delete_id.clone();
                                                        spawn_local(async move {
                                                            match api::delete_plot_inquiry(&id).await {
                                                                Ok(()) => collection.apply_remove(&id),
                                                                Err(err) => web_sys::console::error_1(
                                                                    &format!("Error deleting plot inquiry: {err}").into(),
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
