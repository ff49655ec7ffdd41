//! ==============================================================================
//! config.rs - build-time site settings
//! ==============================================================================
//!
//! values are baked in at compile time with `option_env!`, the wasm bundle
//! has no runtime environment to read from.
//!
//!     STATION_CONTENT_URL      cms search endpoint returning header + download
//!     STATION_FLOAT_THRESHOLD  scroll offset (px) after which the header floats
//!     STATION_THEME            `dark` or `light`
//!
//! ==============================================================================

use leptos::logging::warn;
use station_content::Theme;

pub const DEFAULT_CONTENT_URL: &str = "/content/site.json";
pub const DEFAULT_FLOAT_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub content_url: String,
    pub float_threshold: f64,
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_url: DEFAULT_CONTENT_URL.to_string(),
            float_threshold: DEFAULT_FLOAT_THRESHOLD,
            theme: Theme::Light,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("STATION_CONTENT_URL"),
            option_env!("STATION_FLOAT_THRESHOLD"),
            option_env!("STATION_THEME"),
        )
    }

    fn from_values(content_url: Option<&str>, threshold: Option<&str>, theme: Option<&str>) -> Self {
        let defaults = Self::default();

        let content_url = content_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.content_url);

        let float_threshold = match threshold.map(|t| t.trim().parse::<f64>()) {
            Some(Ok(px)) if px.is_finite() && px >= 0.0 => px,
            Some(_) => {
                warn!("ignoring invalid STATION_FLOAT_THRESHOLD, using {DEFAULT_FLOAT_THRESHOLD}");
                defaults.float_threshold
            }
            None => defaults.float_threshold,
        };

        let theme = theme.map(Theme::from_name).unwrap_or(defaults.theme);

        Self {
            content_url,
            float_threshold,
            theme,
        }
    }
}
