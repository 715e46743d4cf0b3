//! Tile addressing and URL templating for the raster tile layer.

use crate::map::mercator::{self, TILE_SIZE};
use crate::map::viewport::Viewport;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 19.0;

pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Address of one raster tile in the slippy-map pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    /// Expands a `{z}/{x}/{y}` URL template for this tile.
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// Tiles covering a `screen_width` x `screen_height` viewport, row-major.
///
/// The tile zoom is the floored viewport zoom; the caller scales tile quads
/// by the fractional remainder when drawing.
pub fn visible_tiles(viewport: &Viewport, screen_width: f32, screen_height: f32) -> Vec<TileId> {
    let zoom = tile_zoom(viewport.zoom);
    let scale = (viewport.zoom - zoom as f64).exp2();
    let (center_x, center_y) = mercator::project(viewport.center, zoom as f64);

    let half_w = screen_width as f64 / 2.0 / scale;
    let half_h = screen_height as f64 / 2.0 / scale;
    let max_tile = (1u32 << zoom) - 1;

    let min_x = (((center_x - half_w) / TILE_SIZE).floor().max(0.0)) as u32;
    let max_x = ((((center_x + half_w) / TILE_SIZE).floor()) as u32).min(max_tile);
    let min_y = (((center_y - half_h) / TILE_SIZE).floor().max(0.0)) as u32;
    let max_y = ((((center_y + half_h) / TILE_SIZE).floor()) as u32).min(max_tile);

    let mut tiles = Vec::with_capacity(
        ((max_x.saturating_sub(min_x) + 1) * (max_y.saturating_sub(min_y) + 1)) as usize,
    );
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            tiles.push(TileId { zoom, x, y });
        }
    }
    tiles
}

/// Integer pyramid level for a continuous viewport zoom.
pub fn tile_zoom(zoom: f64) -> u8 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM).floor() as u8
}
