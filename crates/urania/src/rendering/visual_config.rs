//! Theme palettes for the SVG renderer.

use crate::aspects::types::AspectType;
use crate::chart::config::Theme;
use crate::chart::types::House;
use crate::ephemeris::types::PlanetId;
use crate::western::signs::Element;

/// One theme's full color set. Indexed arrays follow the canonical orders
/// of their enums.
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub text: &'static str,
    /// Fire, Earth, Air, Water
    element_colors: [&'static str; 4],
    /// [`AspectType::ALL`] order
    aspect_colors: [&'static str; 9],
    /// angular, succedent, cadent
    house_class_colors: [&'static str; 3],
    /// [`PlanetId::ALL`] order
    planet_colors: [&'static str; 11],
}

static LIGHT: Palette = Palette {
    background: "#ffffff",
    foreground: "#000000",
    text: "#333333",
    element_colors: ["#ff4444", "#8b4513", "#4169e1", "#006400"],
    aspect_colors: [
        "#000000", "#0066cc", "#cc0000", "#00cc00", "#cc0000", "#666666", "#ff6666", "#ff6666",
        "#cc6600",
    ],
    house_class_colors: ["#ff0000", "#00aa00", "#0000ff"],
    planet_colors: [
        "#ffaa00", "#c0c0c0", "#ffff00", "#00ff00", "#ff0000", "#ff8800", "#444444", "#00ffff",
        "#0066ff", "#800080", "#000000",
    ],
};

static DARK: Palette = Palette {
    background: "#1a1a1a",
    foreground: "#ffffff",
    text: "#e0e0e0",
    element_colors: ["#ff6666", "#cd853f", "#6495ed", "#20b2aa"],
    aspect_colors: [
        "#ffffff", "#4da6ff", "#ff4d4d", "#4dff4d", "#ff4d4d", "#cccccc", "#ff9999", "#ff9999",
        "#ffaa4d",
    ],
    house_class_colors: ["#ff4d4d", "#4dff4d", "#4d4dff"],
    planet_colors: [
        "#ffcc4d", "#e6e6e6", "#ffff4d", "#4dff4d", "#ff4d4d", "#ffaa4d", "#999999", "#4dffff",
        "#4d99ff", "#cc4dcc", "#ffffff",
    ],
};

static MONO: Palette = Palette {
    background: "#ffffff",
    foreground: "#000000",
    text: "#000000",
    element_colors: ["#000000", "#000000", "#000000", "#000000"],
    aspect_colors: [
        "#000000", "#666666", "#000000", "#333333", "#000000", "#999999", "#666666", "#666666",
        "#666666",
    ],
    house_class_colors: ["#000000", "#333333", "#666666"],
    planet_colors: [
        "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
        "#000000", "#000000", "#000000",
    ],
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
            Theme::Mono => &MONO,
        }
    }

    pub fn element_color(&self, element: Element) -> &'static str {
        let idx = Element::ALL
            .iter()
            .position(|&e| e == element)
            .unwrap_or(0);
        self.element_colors[idx]
    }

    pub fn aspect_color(&self, kind: AspectType) -> &'static str {
        let idx = AspectType::ALL
            .iter()
            .position(|&k| k == kind)
            .unwrap_or(0);
        self.aspect_colors[idx]
    }

    pub fn house_color(&self, house: &House) -> &'static str {
        if house.is_angular() {
            self.house_class_colors[0]
        } else if house.is_succedent() {
            self.house_class_colors[1]
        } else {
            self.house_class_colors[2]
        }
    }

    pub fn planet_color(&self, planet: PlanetId) -> &'static str {
        let idx = PlanetId::ALL
            .iter()
            .position(|&p| p == planet)
            .unwrap_or(0);
        self.planet_colors[idx]
    }
}

/// Append an alpha channel to a `#rrggbb` color. Non-hex colors pass
/// through unchanged.
pub fn with_alpha(color: &str, opacity: f64) -> String {
    if let Some(hex) = color.strip_prefix('#') {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{}{:02x}", hex, alpha)
    } else {
        color.to_string()
    }
}
