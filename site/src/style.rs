//! class hooks for the header
//!
//! all responsive rules (breakpoints, mobile full-height menu, blur) live in
//! `style/main.css` keyed by these classes. components only toggle modifiers.

use station_content::{ButtonVariant, Theme};

pub fn header_class(nav_mobile_open: bool, is_floatted: bool) -> String {
    let mut class = String::from("header");
    if nav_mobile_open {
        class.push_str(" header--open");
    }
    if is_floatted {
        class.push_str(" header--floating");
    }
    class
}

/// mobile: hidden unless open. desktop: always a flex row.
pub fn nav_class(nav_mobile_open: bool) -> &'static str {
    if nav_mobile_open {
        "header-nav header-nav--open"
    } else {
        "header-nav"
    }
}

pub fn nav_button_class(open: bool) -> &'static str {
    if open {
        "header-nav-button header-nav-button--open"
    } else {
        "header-nav-button"
    }
}

pub fn nav_link_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "header-nav-link header-nav-link--dark",
        Theme::Light => "header-nav-link",
    }
}

/// light pages brighten the logo to white
pub fn logo_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "header-logo",
        Theme::Light => "header-logo header-logo--inverted",
    }
}

pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    let mut class = format!("button button--{}", variant.as_str());
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// tracking class is appended untouched for analytics selectors
pub fn download_class(tracking_class: Option<&str>) -> String {
    match tracking_class {
        Some(tracking) => format!("header-download {tracking}"),
        None => "header-download".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_only_touches_open_modifiers() {
        for floating in [false, true] {
            let closed = header_class(false, floating);
            let open = header_class(true, floating);
            assert!(!closed.contains("header--open"));
            assert!(open.contains("header--open"));
            assert_eq!(
                closed.contains("header--floating"),
                open.contains("header--floating")
            );
        }
        assert_eq!(nav_class(false), "header-nav");
        assert_eq!(nav_class(true), "header-nav header-nav--open");
    }

    #[test]
    fn test_floating_is_independent_of_menu() {
        assert_eq!(header_class(false, false), "header");
        assert_eq!(header_class(false, true), "header header--floating");
        assert_eq!(header_class(true, true), "header header--open header--floating");
    }

    #[test]
    fn test_theme_classes() {
        assert!(nav_link_class(Theme::Dark).ends_with("--dark"));
        assert_eq!(nav_link_class(Theme::Light), "header-nav-link");
        assert_eq!(logo_class(Theme::Dark), "header-logo");
        assert!(logo_class(Theme::Light).contains("--inverted"));
    }

    #[test]
    fn test_button_and_download_classes() {
        assert_eq!(button_class(ButtonVariant::Primary, ""), "button button--primary");
        assert_eq!(
            button_class(ButtonVariant::Light, download_class(Some("track-dl")).as_str()),
            "button button--light header-download track-dl"
        );
        assert_eq!(download_class(None), "header-download");
    }
}
