//! Admin Properties Page
//!
//! Server-paged property table. Unlike the lead tables, paging happens
//! on the backend (`?page=N&limit=M`), so a delete refetches the
//! current page instead of patching a local snapshot.

use collection_view::LISTING_PAGE_SIZE;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Pager, RowDeleteButton};
use crate::models::Property;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let (properties, set_properties) = signal(Vec::<Property>::new());
    let (page, set_page) = signal(1usize);
    let (total_pages, set_total_pages) = signal(1usize);
    let (loading, set_loading) = signal(true);
    // bumped after a confirmed delete to refetch the current page
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let requested = page.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_properties_page(requested, LISTING_PAGE_SIZE).await {
                Ok(list) => {
                    let empty_past_end = list.items.is_empty() && requested > list.total_pages;
                    set_total_pages.set(list.total_pages);
                    set_properties.set(list.items);
                    if empty_past_end {
                        // deleting the last row of the last page shrank the
                        // list; step back onto the new last page
                        set_page.set(list.total_pages);
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch properties: {err}").into(),
                    );
                    set_properties.set(Vec::new());
                    set_total_pages.set(1);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="admin-page">
            <div class="admin-page-header">
                <h1>"Manage Properties"</h1>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && properties.get().is_empty()>
                <p class="empty-state">"No Properties found."</p>
            </Show>

            <Show when=move || !properties.get().is_empty()>
                <div class="table-scroll">
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Purpose"</th>
                                <th>"Type"</th>
                                <th>"Location"</th>
                                <th>"Added"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || properties.get()
                                key=|property| property.id.clone()
                                children=move |property: Property| {
                                    let slug = property.slug.clone();
                                    view! {
                                        <tr>
                                            <td>{property.title.clone()}</td>
                                            <td>{property.purpose.label()}</td>
                                            <td>{property.property_type.clone()}</td>
                                            <td>{property.location.clone()}</td>
                                            <td>{property.created_at.format("%d %b %Y").to_string()}</td>
                                            <td class="row-actions">
                                                <RowDeleteButton
                                                    entity="property"
                                                    on_confirm=move |_| {
                                                        let slug = slug.clone();
                                                        spawn_local(async move {
                                                            match api::delete_property(&slug).await {
                                                                Ok(()) => set_reload_trigger.update(|v| *v += 1),
                                                                Err(err) => web_sys::console::error_1(
                                                                    &format!("Delete failed: {err}").into(),
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
                    current=page
                    total=total_pages
                    on_page=move |next: usize| set_page.set(next.clamp(1, total_pages.get()))
                />
            </Show>
        </div>
    }
}
