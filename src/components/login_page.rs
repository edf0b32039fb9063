//! Admin Login Page
//!
//! Credential form feeding the AdminSession context. An already
//! logged-in visitor is sent straight to the admin console.

use leptos::prelude::*;

use crate::context::{use_app_context, AdminView, Route};
use crate::session::use_admin_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_admin_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        if session.is_logged_in() {
            ctx.navigate(Route::Admin(AdminView::Dashboard));
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match session.log_in(&email.get(), &password.get()) {
            Ok(()) => ctx.navigate(Route::Admin(AdminView::Dashboard)),
            Err(message) => set_error.set(message.to_string()),
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h2>"Admin Login"</h2>

                <label>"Username"</label>
                <input
                    type="email"
                    placeholder="admin@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label>"Password"</label>
                <div class="password-row">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="toggle-password"
                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>

                <button type="submit">"Login"</button>
            </form>
        </div>
    }
}
