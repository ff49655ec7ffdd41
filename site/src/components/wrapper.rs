//! Centered page-width container

use leptos::prelude::*;

#[component]
pub fn Wrapper(
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "wrapper".to_string()
    } else {
        format!("wrapper {class}")
    };

    view! {
        <div class=class>{children()}</div>
    }
}
