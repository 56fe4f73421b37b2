//! Expense categories and their display colors
//!
//! Categories are free text on the wire. A fixed table maps the well-known
//! ones to a pill color; everything else gets the fallback.

use std::fmt;

/// Label used for expenses without a category
pub const UNCATEGORIZED: &str = "Other";

/// A `#RRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(&'static str);

impl HexColor {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Red, green and blue components
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.0.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

/// Color for categories missing from the table
pub const FALLBACK_COLOR: HexColor = HexColor::new("#64D2FF");

const CATEGORY_COLORS: [(&str, HexColor); 9] = [
    ("Food", HexColor::new("#FF9500")),
    ("Transportation", HexColor::new("#FF2D55")),
    ("Entertainment", HexColor::new("#5AC8FA")),
    ("Shopping", HexColor::new("#007AFF")),
    ("Housing", HexColor::new("#5856D6")),
    ("Utilities", HexColor::new("#AF52DE")),
    ("Healthcare", HexColor::new("#FF3B30")),
    ("Education", HexColor::new("#34C759")),
    ("Travel", HexColor::new("#FFCC00")),
];

/// Slice colors for the category breakdown, assigned by position
pub const CHART_PALETTE: [HexColor; 10] = [
    HexColor::new("#34C759"),
    HexColor::new("#FF2D55"),
    HexColor::new("#5AC8FA"),
    HexColor::new("#007AFF"),
    HexColor::new("#5856D6"),
    HexColor::new("#AF52DE"),
    HexColor::new("#FF3B30"),
    HexColor::new("#FFCC00"),
    HexColor::new("#64D2FF"),
    HexColor::new("#FF9500"),
];

/// Pill color for a category name (exact, case-sensitive match)
pub fn category_color(category: &str) -> HexColor {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Palette color for the `index`-th chart slice
pub fn palette_color(index: usize) -> HexColor {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// Category label for display, defaulting to "Other"
pub fn category_label(category: Option<&str>) -> &str {
    match category {
        Some(c) if !c.trim().is_empty() => c,
        _ => UNCATEGORIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(category_color("Food").as_str(), "#FF9500");
        assert_eq!(category_color("Travel").as_str(), "#FFCC00");
    }

    #[test]
    fn test_fallback_color() {
        assert_eq!(category_color("Pets"), FALLBACK_COLOR);
        assert_eq!(category_color("food"), FALLBACK_COLOR);
        assert_eq!(category_color(UNCATEGORIZED), FALLBACK_COLOR);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(10));
        assert_eq!(palette_color(9).as_str(), "#FF9500");
    }

    #[test]
    fn test_rgb() {
        assert_eq!(HexColor::new("#FF9500").rgb(), (255, 149, 0));
        assert_eq!(FALLBACK_COLOR.rgb(), (100, 210, 255));
    }

    #[test]
    fn test_label() {
        assert_eq!(category_label(None), "Other");
        assert_eq!(category_label(Some("  ")), "Other");
        assert_eq!(category_label(Some("Food")), "Food");
    }
}
