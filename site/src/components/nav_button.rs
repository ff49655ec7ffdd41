//! Mobile menu toggle

use leptos::prelude::*;

use crate::style::nav_button_class;

#[component]
pub fn NavButton(
    #[prop(into)]
    open: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || nav_button_class(open.get())
            aria-label="Toggle navigation"
            aria-expanded=move || if open.get() { "true" } else { "false" }
            on:click=move |_| on_click.run(())
        >
            <span class="header-nav-button-bar"></span>
            <span class="header-nav-button-bar"></span>
            <span class="header-nav-button-bar"></span>
        </button>
    }
}
