//! Color scheme keyed by the closed category enumeration.
//!
//! Exhaustive matches: adding a category without a color is a build error,
//! not a silent fallback.

use catalog::Category;
use egui::Color32;

/// Marker fill color on the map.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Historic => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Category::Cultural => Color32::from_rgb(0x8b, 0x5c, 0xf6),
        Category::Nature => Color32::from_rgb(0x10, 0xb9, 0x81),
        Category::Modern => Color32::from_rgb(0x3b, 0x82, 0xf6),
        Category::Religious => Color32::from_rgb(0xf4, 0x3f, 0x5e),
        Category::Landmark => Color32::from_rgb(0xf9, 0x73, 0x16),
    }
}

/// Badge background and text colors (pale tint, dark text).
pub fn badge_colors(category: Category) -> (Color32, Color32) {
    match category {
        Category::Historic => (
            Color32::from_rgb(0xfe, 0xf3, 0xc7),
            Color32::from_rgb(0x92, 0x40, 0x0e),
        ),
        Category::Cultural => (
            Color32::from_rgb(0xf3, 0xe8, 0xff),
            Color32::from_rgb(0x6b, 0x21, 0xa8),
        ),
        Category::Nature => (
            Color32::from_rgb(0xdc, 0xfc, 0xe7),
            Color32::from_rgb(0x16, 0x65, 0x34),
        ),
        Category::Modern => (
            Color32::from_rgb(0xdb, 0xea, 0xfe),
            Color32::from_rgb(0x1e, 0x40, 0xaf),
        ),
        Category::Religious => (
            Color32::from_rgb(0xff, 0xe4, 0xe6),
            Color32::from_rgb(0x9f, 0x12, 0x39),
        ),
        Category::Landmark => (
            Color32::from_rgb(0xff, 0xed, 0xd5),
            Color32::from_rgb(0x9a, 0x34, 0x12),
        ),
    }
}

pub const CITY_MARKER_COLOR: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);

pub const PLACE_MARKER_RADIUS: f32 = 12.5;
pub const PLACE_MARKER_RADIUS_HIGHLIGHTED: f32 = 17.5;
pub const CITY_MARKER_RADIUS: f32 = 15.0;

/// Background shown behind missing/blank tiles.
pub const MAP_BACKDROP: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
