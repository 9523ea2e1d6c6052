use crate::models::settings::Theme;

/// Color palette for one theme. All values are CSS color strings a canvas
/// or SVG frontend can use directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub grid: &'static str,
    /// Price line and crosshair color
    pub accent: &'static str,
    /// Fill under the price line
    pub area: &'static str,
    /// Axis label color
    pub text: &'static str,
    pub bullish: &'static str,
    pub bearish: &'static str,
    pub tooltip_bg: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
}

pub const DARK: Palette = Palette {
    background: "#0a192f",
    grid: "#1e293b",
    accent: "#64ffda",
    area: "rgba(100, 255, 218, 0.1)",
    text: "#64748b",
    bullish: "#10b981",
    bearish: "#ef4444",
    tooltip_bg: "rgba(17, 34, 64, 0.95)",
    tooltip_border: "#64ffda",
    tooltip_text: "#ffffff",
};

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    grid: "#e5e7eb",
    accent: "#2563eb",
    area: "rgba(37, 99, 235, 0.1)",
    text: "#6b7280",
    bullish: "#10b981",
    bearish: "#ef4444",
    tooltip_bg: "rgba(255, 255, 255, 0.95)",
    tooltip_border: "#2563eb",
    tooltip_text: "#000000",
};

impl Palette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}
