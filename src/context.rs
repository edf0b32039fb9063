//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Purpose;

/// Admin console views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminView {
    Dashboard,
    Leads,
    BrochureLeads,
    Plots,
    Properties,
}

/// Top-level views switched by the nav bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Listings(Purpose),
    Enquiry,
    Login,
    Admin(AdminView),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current top-level view - read
    pub route: ReadSignal<Route>,
    /// Current top-level view - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch to another view
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
