//! ==============================================================================
//! lib.rs - content model for the station marketing site
//! ==============================================================================
//!
//! purpose:
//!     defines the cms records the site header renders from, and the pure
//!     decisions made over them (which nav items exist, which logo shows,
//!     which download url is active). no rendering happens here.
//!
//! relationships:
//!     - used by: site (api fetch, header components)
//!
//! design rationale:
//!     the components stay thin views over these functions, so every
//!     "optional field hides ui" rule lives here and is unit tested
//!     without a browser.
//!
//! ==============================================================================

mod device;
mod document;
mod download;
mod error;
mod header;
mod theme;

pub use device::DeviceClass;
pub use document::{Document, SearchResponse, DOWNLOAD_TYPE, HEADER_TYPE};
pub use download::{DownloadContent, DownloadLink, UrlField};
pub use error::ContentError;
pub use header::{
    Dimensions, HeaderContent, Image, LinkRecord, LinkType, LogoView, NavItem, FALLBACK_LOGO_TEXT,
    FEATURES_PATH, HOME_PATH,
};
pub use theme::{ButtonVariant, Theme};
