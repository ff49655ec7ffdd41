//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod button;
mod download_button;
mod header;
mod nav_button;
mod nav_link;
mod wrapper;

pub use button::Button;
pub use download_button::DownloadButton;
pub use header::Header;
pub use nav_button::NavButton;
pub use nav_link::NavLink;
pub use wrapper::Wrapper;
