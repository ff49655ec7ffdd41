/// page theme, `dark` or anything else
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

/// variant of the shared button primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Light,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// download button variant, light pages sit on a dark hero
    pub fn button_variant(self) -> ButtonVariant {
        match self {
            Theme::Dark => ButtonVariant::Primary,
            Theme::Light => ButtonVariant::Light,
        }
    }
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Light => "light",
        }
    }
}
