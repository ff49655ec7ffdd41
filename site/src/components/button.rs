//! Shared button primitive, rendered as a link

use leptos::prelude::*;
use station_content::ButtonVariant;

use crate::style::button_class;

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[prop(into)]
    href: String,
    /// extra classes appended after the variant
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a class=button_class(variant, &class) href=href>
            {children()}
        </a>
    }
}
