//! Download call-to-action

use leptos::prelude::*;
use station_content::{DownloadLink, Theme};

use super::Button;
use crate::style::download_class;

/// `link` already carries the url picked for the visitor's device
#[component]
pub fn DownloadButton(link: DownloadLink, theme: Theme) -> impl IntoView {
    let DownloadLink {
        text,
        href,
        tracking_class,
    } = link;

    view! {
        <Button
            variant=theme.button_variant()
            href=href
            class=download_class(tracking_class.as_deref())
        >
            {text}
        </Button>
    }
}
