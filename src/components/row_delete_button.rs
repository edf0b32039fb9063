//! Two-step delete control for admin table rows.

use leptos::prelude::*;

fn confirm_prompt(entity: &str) -> String {
    format!("Delete this {entity}?")
}

/// Row delete button that asks before firing.
///
/// First click swaps the button for a "Delete this {entity}?" prompt with
/// Yes/No. Only Yes runs the callback; either answer collapses the prompt.
#[component]
pub fn RowDeleteButton(
    /// What the row holds ("lead", "property", ...), spliced into the prompt
    entity: &'static str,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                view! {
                    <button
                        class="delete-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(true);
                        }
                    >
                        "Delete"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{confirm_prompt(entity)}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::confirm_prompt;

    #[test]
    fn prompt_names_the_row_entity() {
        assert_eq!(confirm_prompt("lead"), "Delete this lead?");
        assert_eq!(confirm_prompt("plot inquiry"), "Delete this plot inquiry?");
    }
}
