//! Pager Component
//!
//! Prev/Next pager with the current page's neighbors and ellipsis gaps
//! to the first and last page. Hidden entirely for a single page.

use leptos::prelude::*;

#[component]
pub fn Pager(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <div class="pager">
                <button
                    class="pager-step"
                    disabled=move || current.get() == 1
                    on:click=move |_| on_page.run(current.get().saturating_sub(1).max(1))
                >
                    "Prev"
                </button>

                <Show when=move || { current.get() > 2 }>
                    <span class="pager-edge">"1"</span>
                    <Show when=move || { current.get() > 3 }>
                        <span class="pager-gap">"..."</span>
                    </Show>
                </Show>

                <Show when=move || { current.get() > 1 }>
                    <button
                        class="pager-neighbor"
                        on:click=move |_| on_page.run(current.get().saturating_sub(1).max(1))
                    >
                        {move || current.get().saturating_sub(1).max(1)}
                    </button>
                </Show>

                <span class="pager-current">{move || current.get()}</span>

                <Show when=move || current.get() < total.get()>
                    <button
                        class="pager-neighbor"
                        on:click=move |_| on_page.run(current.get() + 1)
                    >
                        {move || current.get() + 1}
                    </button>
                </Show>

                <Show when=move || current.get() < total.get().saturating_sub(1)>
                    <Show when=move || current.get() < total.get().saturating_sub(2)>
                        <span class="pager-gap">"..."</span>
                    </Show>
                    <span class="pager-edge">{move || total.get()}</span>
                </Show>

                <button
                    class="pager-step"
                    disabled=move || current.get() == total.get()
                    on:click=move |_| on_page.run(current.get() + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
