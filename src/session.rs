//! Admin Session
//!
//! Explicit session context for the admin console, provided via the
//! Leptos Context API instead of ad-hoc localStorage reads. The flag
//! still persists under the same localStorage key so an open tab stays
//! logged in across reloads. This is a UI-routing guard, not an
//! authentication mechanism.

use leptos::prelude::*;

const ADMIN_FLAG_KEY: &str = "isAdmin";

// Credential pair checked client-side, as the deployed console does
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin@2025";

/// Session signals provided to every admin view
#[derive(Clone, Copy)]
pub struct AdminSession {
    logged_in: ReadSignal<bool>,
    set_logged_in: WriteSignal<bool>,
}

impl AdminSession {
    /// Restore the session from localStorage on startup
    pub fn restore() -> Self {
        let (logged_in, set_logged_in) = signal(read_flag());
        Self {
            logged_in,
            set_logged_in,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    /// Check credentials; on success persist the flag and flip the signal
    pub fn log_in(&self, email: &str, password: &str) -> Result<(), &'static str> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            write_flag(true);
            self.set_logged_in.set(true);
            Ok(())
        } else {
            Err("Invalid username or password")
        }
    }

    pub fn log_out(&self) {
        write_flag(false);
        self.set_logged_in.set(false);
    }
}

pub fn use_admin_session() -> AdminSession {
    expect_context::<AdminSession>()
}

fn read_flag() -> bool {
    web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ADMIN_FLAG_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}

fn write_flag(logged_in: bool) {
    if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
        let result = if logged_in {
            storage.set_item(ADMIN_FLAG_KEY, "true")
        } else {
            storage.remove_item(ADMIN_FLAG_KEY)
        };
        if result.is_err() {
            web_sys::console::error_1(&"Failed to persist admin session flag".into());
        }
    }
}
