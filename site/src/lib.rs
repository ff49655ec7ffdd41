//! ==============================================================================
//! lib.rs - Station marketing site
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the station marketing site. renders the
//!     page header from cms content: logo, nav links, mobile menu toggle
//!     and a device-aware download button.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - content fetched from the cms at startup
//!     - the page (App) owns all state, components render from props
//!
//! ==============================================================================

use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::Router;
use station_content::DeviceClass;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod config;
mod style;

use api::SiteContent;
use components::Header;
use config::SiteConfig;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_env();
    let theme = config.theme;
    let device = detect_device();

    // bare header (fallback logo, toggle) until the cms answers
    let (content, set_content) = signal(SiteContent::default());
    let (nav_mobile_open, set_nav_mobile_open) = signal(false);
    let (is_floatted, set_is_floatted) = signal(false);

    let toggle_nav_mobile = Callback::new(move |_: ()| {
        set_nav_mobile_open.update(|open| *open = !*open);
    });

    // header floats once the page leaves the top
    let threshold = config.float_threshold;
    let _scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let floating = window().scroll_y().unwrap_or(0.0) > threshold;
        if is_floatted.get_untracked() != floating {
            set_is_floatted.set(floating);
        }
    });

    // load content
    let url = config.content_url.clone();
    leptos::task::spawn_local(async move {
        match api::fetch_site_content(&url).await {
            Ok(site) => {
                log!(
                    "loaded header content: {} nav links",
                    site.header.data.nav_items().len()
                );
                set_content.set(site);
            }
            // keep the bare header
            Err(e) => error!("failed to load header content: {e}"),
        }
    });

    view! {
        <Title text="Station" />
        <Router>
            {move || {
                let site = content.get();
                view! {
                    <Header
                        theme=theme
                        header=site.header.data
                        download=site.download.data
                        device=device
                        toggle_nav_mobile=toggle_nav_mobile
                        nav_mobile_open=nav_mobile_open
                        is_floatted=is_floatted
                    />
                }
            }}
            <main class="page"></main>
        </Router>
    }
}

fn detect_device() -> DeviceClass {
    match window().navigator().user_agent() {
        Ok(ua) => DeviceClass::from_user_agent(&ua),
        Err(_) => {
            warn!("user agent unavailable, assuming desktop");
            DeviceClass::Desktop
        }
    }
}
