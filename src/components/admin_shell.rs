//! Admin Shell Component
//!
//! Session guard plus the tab bar the admin views share. Every admin
//! route renders through here, so the login check lives in one place.

use leptos::prelude::*;

use crate::components::{BrochureLeadsPage, Dashboard, LeadsPage, PlotsPage, PropertiesPage};
use crate::context::{use_app_context, AdminView, Route};
use crate::session::use_admin_session;

const ADMIN_TABS: &[(&str, AdminView)] = &[
    ("Dashboard", AdminView::Dashboard),
    ("Leads", AdminView::Leads),
    ("Brochure Leads", AdminView::BrochureLeads),
    ("Plots", AdminView::Plots),
    ("Properties", AdminView::Properties),
];

#[component]
pub fn AdminShell(view: AdminView) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_admin_session();

    // Not logged in: bounce to the login view instead of rendering
    Effect::new(move |_| {
        if !session.is_logged_in() {
            ctx.navigate(Route::Login);
        }
    });

    view! {
        <Show when=move || session.is_logged_in()>
            <div class="admin-shell">
                <div class="admin-tab-bar">
                    {ADMIN_TABS
                        .iter()
                        .map(|(label, tab)| {
                            let tab = *tab;
                            let tab_class = move || {
                                if view == tab { "admin-tab active" } else { "admin-tab" }
                            };
                            view! {
                                <button
                                    class=tab_class
                                    on:click=move |_| ctx.navigate(Route::Admin(tab))
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {match view {
                    AdminView::Dashboard => view! { <Dashboard /> }.into_any(),
                    AdminView::Leads => view! { <LeadsPage /> }.into_any(),
                    AdminView::BrochureLeads => view! { <BrochureLeadsPage /> }.into_any(),
                    AdminView::Plots => view! { <PlotsPage /> }.into_any(),
                    AdminView::Properties => view! { <PropertiesPage /> }.into_any(),
                }}
            </div>
        </Show>
    }
}
