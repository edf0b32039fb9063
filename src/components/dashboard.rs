//! Admin Dashboard
//!
//! Stat cards counting every collection the console manages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, DashboardCounts};

#[component]
pub fn Dashboard() -> impl IntoView {
    let (counts, set_counts) = signal(DashboardCounts::default());

    Effect::new(move |_| {
        spawn_local(async move {
            set_counts.set(api::fetch_dashboard_counts().await);
        });
    });

    view! {
        <section class="dashboard">
            <h2>"Admin Dashboard"</h2>
            <div class="stat-grid">
                <StatCard title="Blogs" count=Signal::derive(move || counts.get().blogs) />
                <StatCard title="Properties" count=Signal::derive(move || counts.get().properties) />
                <StatCard title="Leads" count=Signal::derive(move || counts.get().leads) />
                <StatCard
                    title="Brochure Leads"
                    count=Signal::derive(move || counts.get().brochure_leads)
                />
                <StatCard title="Plots" count=Signal::derive(move || counts.get().plots) />
                <StatCard
                    title="Sell Property Requests"
                    count=Signal::derive(move || counts.get().sell_requests)
                />
            </div>
        </section>
    }
}

#[component]
fn StatCard(#[prop(into)] title: String, #[prop(into)] count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{title}</h3>
            <p class="stat-count">{move || count.get()}</p>
        </div>
    }
}
