//! Estates Frontend App
//!
//! Top-level component: route signal, session context, nav bar.

use leptos::prelude::*;

use crate::components::{AdminShell, EnquiryForm, LoginPage, NavBar, PropertyList};
use crate::context::{AppContext, Route};
use crate::models::Purpose;
use crate::session::AdminSession;

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::Listings(Purpose::Buy));

    // Provide context to all children
    provide_context(AppContext::new((route, set_route)));
    provide_context(AdminSession::restore());

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match route.get() {
                    Route::Listings(purpose) => {
                        view! { <PropertyList purpose=purpose /> }.into_any()
                    }
                    Route::Enquiry => view! { <EnquiryForm /> }.into_any(),
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::Admin(admin_view) => {
                        view! { <AdminShell view=admin_view /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
