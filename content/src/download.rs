//! download singleton and the call-to-action it produces

use serde::{Deserialize, Serialize};

use crate::device::DeviceClass;
use crate::header::HeaderContent;

/// cms link field, `url` is missing for unset links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlField {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadContent {
    #[serde(default)]
    pub button_url: Option<UrlField>,
    #[serde(default)]
    pub button_url_mobile: Option<UrlField>,
}

/// the single download button to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub text: String,
    pub href: String,
    pub tracking_class: Option<String>,
}

fn url_of(field: &Option<UrlField>) -> Option<&str> {
    field
        .as_ref()
        .and_then(|f| f.url.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl DownloadContent {
    pub fn desktop_url(&self) -> Option<&str> {
        url_of(&self.button_url)
    }

    pub fn mobile_url(&self) -> Option<&str> {
        url_of(&self.button_url_mobile)
    }

    /// url for the device, falling back to the other variant when the
    /// preferred one is unset
    pub fn url_for(&self, device: DeviceClass) -> Option<&str> {
        match device {
            DeviceClass::Mobile => self.mobile_url().or_else(|| self.desktop_url()),
            DeviceClass::Desktop => self.desktop_url().or_else(|| self.mobile_url()),
        }
    }

    /// builds the call-to-action, `None` when the header has no
    /// `download_text` or there is no url
    pub fn link_for(&self, header: &HeaderContent, device: DeviceClass) -> Option<DownloadLink> {
        let text = header.download_label()?;
        let href = self.url_for(device)?;

        Some(DownloadLink {
            text: text.to_string(),
            href: href.to_string(),
            tracking_class: header.tracking_class().map(str::to_string),
        })
    }
}
