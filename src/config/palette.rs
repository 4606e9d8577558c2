//! Named color schemes for the generated app's UI.

use super::Configuration;
use serde::{Deserialize, Serialize};

/// One of the fixed color palettes a generated app can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Purple,
    Teal,
    Green,
    Blue,
    Red,
}

/// Palette values, in the order the template's CSS section uses them.
struct Palette {
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    footer: &'static str,
    button_1: &'static str,
    button_1_dark: &'static str,
    button_2: &'static str,
    button_2_dark: &'static str,
}

impl ColorScheme {
    /// All schemes, in menu order.
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Purple,
        ColorScheme::Teal,
        ColorScheme::Green,
        ColorScheme::Blue,
        ColorScheme::Red,
    ];

    /// Lower-case scheme name.
    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Purple => "purple",
            ColorScheme::Teal => "teal",
            ColorScheme::Green => "green",
            ColorScheme::Blue => "blue",
            ColorScheme::Red => "red",
        }
    }

    /// Capitalized name for menus.
    pub fn title(self) -> &'static str {
        match self {
            ColorScheme::Purple => "Purple",
            ColorScheme::Teal => "Teal",
            ColorScheme::Green => "Green",
            ColorScheme::Blue => "Blue",
            ColorScheme::Red => "Red",
        }
    }

    /// Parse a scheme by name (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|scheme| scheme.name() == s)
    }

    /// Parse a 1-based menu number.
    pub fn from_menu_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    fn palette(self) -> Palette {
        match self {
            ColorScheme::Purple => Palette {
                primary: "#2d1b69",
                secondary: "#4c1d95",
                accent: "#facc15",
                footer: "#a855f7",
                button_1: "#ef4444",
                button_1_dark: "#dc2626",
                button_2: "#fbbf24",
                button_2_dark: "#f59e0b",
            },
            ColorScheme::Teal => Palette {
                primary: "#0f4c75",
                secondary: "#2d6a4f",
                accent: "#40e0d0",
                footer: "#7dd3fc",
                button_1: "#0ea5e9",
                button_1_dark: "#0284c7",
                button_2: "#06b6d4",
                button_2_dark: "#0891b2",
            },
            ColorScheme::Green => Palette {
                primary: "#064e3b",
                secondary: "#065f46",
                accent: "#10b981",
                footer: "#6ee7b7",
                button_1: "#059669",
                button_1_dark: "#047857",
                button_2: "#10b981",
                button_2_dark: "#059669",
            },
            ColorScheme::Blue => Palette {
                primary: "#1e3a8a",
                secondary: "#1e40af",
                accent: "#3b82f6",
                footer: "#93c5fd",
                button_1: "#2563eb",
                button_1_dark: "#1d4ed8",
                button_2: "#3b82f6",
                button_2_dark: "#2563eb",
            },
            ColorScheme::Red => Palette {
                primary: "#7f1d1d",
                secondary: "#991b1b",
                accent: "#f87171",
                footer: "#fca5a5",
                button_1: "#dc2626",
                button_1_dark: "#b91c1c",
                button_2: "#ef4444",
                button_2_dark: "#dc2626",
            },
        }
    }

    /// Primary color, shown in listings and the generated guide.
    pub fn primary_color(self) -> &'static str {
        self.palette().primary
    }

    /// The palette as a partial configuration, merged wholesale during assembly.
    pub fn to_configuration(self) -> Configuration {
        let p = self.palette();
        Configuration::from_pairs([
            ("PRIMARY_COLOR", p.primary),
            ("SECONDARY_COLOR", p.secondary),
            ("ACCENT_COLOR", p.accent),
            ("FOOTER_COLOR", p.footer),
            ("BUTTON_1_COLOR", p.button_1),
            ("BUTTON_1_COLOR_DARK", p.button_1_dark),
            ("BUTTON_2_COLOR", p.button_2),
            ("BUTTON_2_COLOR_DARK", p.button_2_dark),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(ColorScheme::from_str("Teal"), Some(ColorScheme::Teal));
        assert_eq!(ColorScheme::from_str(" RED "), Some(ColorScheme::Red));
        assert_eq!(ColorScheme::from_str("orange"), None);
    }

    #[test]
    fn test_from_menu_number_bounds() {
        assert_eq!(ColorScheme::from_menu_number(1), Some(ColorScheme::Purple));
        assert_eq!(ColorScheme::from_menu_number(5), Some(ColorScheme::Red));
        assert_eq!(ColorScheme::from_menu_number(0), None);
        assert_eq!(ColorScheme::from_menu_number(6), None);
    }

    #[test]
    fn test_every_palette_has_eight_colors() {
        for scheme in ColorScheme::ALL {
            let config = scheme.to_configuration();
            assert_eq!(config.len(), 8, "{} palette", scheme.name());
            assert!(config.iter().all(|(_, v)| v.starts_with('#') && v.len() == 7));
        }
    }

    #[test]
    fn test_teal_values() {
        let config = ColorScheme::Teal.to_configuration();
        assert_eq!(config.get("PRIMARY_COLOR"), Some("#0f4c75"));
        assert_eq!(config.get("ACCENT_COLOR"), Some("#40e0d0"));
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&ColorScheme::Blue).unwrap();
        assert_eq!(yaml.trim(), "blue");
    }
}
