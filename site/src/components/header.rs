//! Header component
//!
//! Fixed nav bar: logo, mobile toggle, nav links and the download button.
//! Holds no state, the open/floating flags and the toggle come from the page.

use leptos::prelude::*;
use leptos_router::components::A;
use station_content::{DeviceClass, DownloadContent, HeaderContent, LogoView, Theme, HOME_PATH};

use super::{DownloadButton, NavButton, NavLink, Wrapper};
use crate::style::{header_class, logo_class, nav_class};

#[component]
pub fn Header(
    theme: Theme,
    header: HeaderContent,
    download: DownloadContent,
    /// picks which download url is active
    device: DeviceClass,
    toggle_nav_mobile: Callback<()>,
    #[prop(into)]
    nav_mobile_open: Signal<bool>,
    /// page scrolled past the float threshold
    #[prop(into)]
    is_floatted: Signal<bool>,
) -> impl IntoView {
    let logo = header.logo_view();
    let items = header.nav_items();
    let download_link = download.link_for(&header, device);

    view! {
        <header class=move || header_class(nav_mobile_open.get(), is_floatted.get())>
            <Wrapper class="header-inner">
                <h1 class="header-title">
                    <A href=HOME_PATH attr:class="header-home">
                        {logo_view(logo, theme)}
                    </A>
                </h1>
                <div class="header-toggle">
                    <NavButton open=nav_mobile_open on_click=toggle_nav_mobile />
                </div>
                <nav class=move || nav_class(nav_mobile_open.get())>
                    {items
                        .into_iter()
                        .map(|item| view! { <NavLink item=item theme=theme /> })
                        .collect_view()}
                    {download_link.map(|link| view! { <DownloadButton link=link theme=theme /> })}
                </nav>
            </Wrapper>
        </header>
    }
}

fn logo_view(logo: LogoView, theme: Theme) -> AnyView {
    match logo {
        LogoView::Image {
            src,
            alt,
            width,
            height,
        } => view! {
            <img
                class=logo_class(theme)
                src=src
                alt=alt
                width=width.map(|w| w.to_string())
                height=height.map(|h| h.to_string())
            />
        }
        .into_any(),
        LogoView::Fallback(text) => view! {
            <div class="header-logo header-logo--text">{text}</div>
        }
        .into_any(),
    }
}
