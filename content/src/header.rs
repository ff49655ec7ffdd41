//! header singleton: logo, nav links, download label

use serde::{Deserialize, Serialize};

/// text shown in place of the logo when the cms has no image
pub const FALLBACK_LOGO_TEXT: &str = "Station";

pub const HOME_PATH: &str = "/";
pub const FEATURES_PATH: &str = "/features";

// ==============================================================================
// cms records
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// cms image field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

/// how a nav link is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// plain anchor, opens in a new tab
    External,
    /// client-side route
    #[default]
    #[serde(other)]
    Internal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<LinkType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderContent {
    #[serde(default)]
    pub logo: Option<Image>,
    #[serde(default)]
    pub logo_alt_text: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<LinkRecord>>,
    #[serde(default)]
    pub download_text: Option<String>,
    #[serde(default)]
    pub download_tracking_class: Option<String>,

    // older documents predate the `links` group and carry three fixed slots
    #[serde(default)]
    pub link_1_text: Option<String>,
    #[serde(default)]
    pub link_2_text: Option<String>,
    #[serde(default)]
    pub link_3_text: Option<String>,
}

// ==============================================================================
// render decisions
// ==============================================================================

/// a link that will actually be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub text: String,
    pub href: String,
    pub kind: LinkType,
}

impl NavItem {
    pub fn is_external(&self) -> bool {
        self.kind == LinkType::External
    }

    /// `target` attribute, only set for external links
    pub fn target(&self) -> Option<&'static str> {
        self.is_external().then_some("_blank")
    }

    /// `rel` attribute, only set for external links
    pub fn rel(&self) -> Option<&'static str> {
        self.is_external().then_some("noreferrer")
    }
}

/// what goes inside the logo link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoView {
    Image {
        src: String,
        alt: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    Fallback(&'static str),
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl HeaderContent {
    /// logo image when the cms has one, fallback text otherwise
    ///
    /// dimensions are optional here: an image with no dimensions still
    /// renders, just without width/height attributes.
    pub fn logo_view(&self) -> LogoView {
        let Some(image) = self.logo.as_ref() else {
            return LogoView::Fallback(FALLBACK_LOGO_TEXT);
        };
        let Some(src) = non_empty(&image.url) else {
            return LogoView::Fallback(FALLBACK_LOGO_TEXT);
        };

        LogoView::Image {
            src: src.to_string(),
            alt: self.logo_alt_text.clone().unwrap_or_default(),
            width: image.dimensions.map(|d| d.width),
            height: image.dimensions.map(|d| d.height),
        }
    }

    /// links to render, in cms order
    ///
    /// records without text are skipped. a record without a url points
    /// home. when the document has no `links` group at all, the legacy
    /// `link_n_text` slots are used instead.
    pub fn nav_items(&self) -> Vec<NavItem> {
        match &self.links {
            Some(links) => links
                .iter()
                .filter_map(|link| {
                    let text = non_empty(&link.text)?;
                    Some(NavItem {
                        text: text.to_string(),
                        href: non_empty(&link.url).unwrap_or(HOME_PATH).to_string(),
                        kind: link.kind.unwrap_or_default(),
                    })
                })
                .collect(),
            None => self.legacy_nav_items(),
        }
    }

    fn legacy_nav_items(&self) -> Vec<NavItem> {
        [
            (&self.link_1_text, FEATURES_PATH),
            (&self.link_2_text, HOME_PATH),
            (&self.link_3_text, HOME_PATH),
        ]
        .into_iter()
        .filter_map(|(text, href)| {
            Some(NavItem {
                text: non_empty(text)?.to_string(),
                href: href.to_string(),
                kind: LinkType::Internal,
            })
        })
        .collect()
    }

    pub fn tracking_class(&self) -> Option<&str> {
        non_empty(&self.download_tracking_class)
    }

    pub(crate) fn download_label(&self) -> Option<&str> {
        non_empty(&self.download_text)
    }
}

// ==============================================================================
// tests
// ==============================================================================
