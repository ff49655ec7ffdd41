//! Nav link that is either a router link or an external anchor

use leptos::prelude::*;
use leptos_router::components::A;
use station_content::{NavItem, Theme};

use crate::style::nav_link_class;

#[component]
pub fn NavLink(item: NavItem, theme: Theme) -> impl IntoView {
    let class = nav_link_class(theme);

    if item.is_external() {
        let target = item.target();
        let rel = item.rel();
        view! {
            <a class=class href=item.href target=target rel=rel>
                {item.text}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=item.href attr:class=class>
                {item.text}
            </A>
        }
        .into_any()
    }
}
