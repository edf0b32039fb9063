//! Nav Bar Component
//!
//! Top-level navigation switching the route signal.

use leptos::prelude::*;

use crate::context::{use_app_context, AdminView, Route};
use crate::models::Purpose;
use crate::session::use_admin_session;

const PUBLIC_TABS: &[(&str, Route)] = &[
    ("Buy", Route::Listings(Purpose::Buy)),
    ("Rent", Route::Listings(Purpose::Rent)),
    ("Lease", Route::Listings(Purpose::Lease)),
    ("Enquiry", Route::Enquiry),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_admin_session();

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Crownpoint Estates"</span>

            {PUBLIC_TABS
                .iter()
                .map(|(label, route)| {
                    let route = *route;
                    let tab_class = move || {
                        if ctx.route.get() == route { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| ctx.navigate(route)>
                            {*label}
                        </button>
                    }
                })
                .collect_view()}

            {move || if session.is_logged_in() {
                view! {
                    <span class="nav-session">
                        <button
                            class="nav-tab"
                            on:click=move |_| ctx.navigate(Route::Admin(AdminView::Dashboard))
                        >
                            "Admin"
                        </button>
                        <button
                            class="nav-tab"
                            on:click=move |_| {
                                session.log_out();
                                ctx.navigate(Route::Login);
                            }
                        >
                            "Logout"
                        </button>
                    </span>
                }
                .into_any()
            } else {
                view! {
                    <button class="nav-tab" on:click=move |_| ctx.navigate(Route::Login)>
                        "Login"
                    </button>
                }
                .into_any()
            }}
        </nav>
    }
}
