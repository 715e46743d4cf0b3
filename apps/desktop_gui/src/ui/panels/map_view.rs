//! Map presentation surface: raster tile layer, city/place markers, popups,
//! and the per-city fly-to animation.
//!
//! The surface is a read-only observer of the controller; the only way it
//! mutates selection state is by calling `select_place` on marker clicks.

use std::collections::HashMap;

use catalog::{City, GeoPoint, Place};
use crossbeam_channel::Sender;
use explorer_core::PlaceExplorer;

use crate::backend_bridge::commands::WorkerCommand;
use crate::controller::events::TileImage;
use crate::controller::orchestration::dispatch_tile_request;
use crate::map::mercator::{self, TILE_SIZE};
use crate::map::tiles::{self, TileId, OSM_ATTRIBUTION};
use crate::map::viewport::{FlyTo, Viewport};
use crate::ui::theme;
use crate::ui::widgets;

/// In-memory tile budget; beyond it, everything the current frame did not
/// touch is dropped.
const TILE_CACHE_CAP: usize = 512;

const SCROLL_ZOOM_SPEED: f64 = 0.005;

enum TileState {
    Pending,
    Ready(egui::TextureHandle),
    Failed,
}

struct CachedTile {
    state: TileState,
    last_used: u64,
}

pub struct MapView {
    viewport: Viewport,
    fly: Option<FlyTo>,
    last_epoch: Option<u64>,
    tiles: HashMap<TileId, CachedTile>,
    place_popup_open: bool,
    city_popup_open: bool,
    frame: u64,
}

impl MapView {
    pub fn new(city: &City) -> Self {
        Self {
            viewport: Viewport::focused_on(city),
            fly: None,
            last_epoch: None,
            tiles: HashMap::new(),
            place_popup_open: false,
            city_popup_open: false,
            frame: 0,
        }
    }

    pub fn on_tile_loaded(&mut self, ctx: &egui::Context, tile: TileId, image: TileImage) {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size, &image.rgba);
        let texture = ctx.load_texture(
            format!("tile-{}-{}-{}", tile.zoom, tile.x, tile.y),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.tiles.insert(
            tile,
            CachedTile {
                state: TileState::Ready(texture),
                last_used: self.frame,
            },
        );
    }

    /// A failed tile degrades to the blank backdrop; no retry loop.
    pub fn on_tile_failed(&mut self, tile: TileId) {
        self.tiles.insert(
            tile,
            CachedTile {
                state: TileState::Failed,
                last_used: self.frame,
            },
        );
    }

    pub fn is_animating(&self) -> bool {
        self.fly.is_some()
    }

    pub fn has_pending_tiles(&self) -> bool {
        self.tiles
            .values()
            .any(|cached| matches!(cached.state, TileState::Pending))
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        explorer: &mut PlaceExplorer,
        cmd_tx: &Sender<WorkerCommand>,
        status: &mut String,
    ) {
        self.frame = self.frame.wrapping_add(1);
        let now = ui.input(|i| i.time);
        self.sync_epoch(explorer, now);
        if let Some(fly) = self.fly {
            let (viewport, done) = fly.at(now);
            self.viewport = viewport;
            if done {
                self.fly = None;
            }
        }

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, theme::MAP_BACKDROP);

        self.handle_pan_and_zoom(ui, rect, &response);
        self.draw_tiles(&painter, rect, cmd_tx, status);

        let city = explorer.active_city();
        let visible = explorer.visible_places();
        // Gentle 2 s pulse shared by the city marker and the highlight.
        let pulse = 1.0 + 0.08 * ((now * std::f64::consts::TAU / 2.0).sin() as f32);

        let city_pos = self.to_screen(rect, city.center);
        draw_city_marker(&painter, city_pos, pulse);

        let markers: Vec<(egui::Pos2, &Place)> = visible
            .iter()
            .map(|place| (self.to_screen(rect, place.location), *place))
            .collect();
        for (pos, place) in &markers {
            let highlighted = explorer.is_highlighted(place.id);
            let radius = if highlighted {
                theme::PLACE_MARKER_RADIUS_HIGHLIGHTED * pulse
            } else {
                theme::PLACE_MARKER_RADIUS
            };
            draw_place_marker(&painter, *pos, radius, theme::category_color(place.category));
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.handle_click(explorer, pointer, city_pos, &markers);
            }
        }

        if self.place_popup_open {
            if let Some(place) = explorer.highlighted_place() {
                let pos = self.to_screen(rect, place.location);
                let on_map = markers.iter().any(|(_, p)| p.id == place.id);
                if on_map && rect.contains(pos) {
                    show_place_popup(ui, pos, place);
                }
            }
        }
        if self.city_popup_open && rect.contains(city_pos) {
            show_city_popup(ui, city_pos, city);
        }

        self.show_zoom_controls(ui, rect);
        show_attribution(ui, rect);
    }

    /// Starts a fly-to exactly once per render-epoch change; category-only
    /// changes never reach this path.
    fn sync_epoch(&mut self, explorer: &PlaceExplorer, now: f64) {
        let epoch = explorer.render_epoch();
        match self.last_epoch {
            None => self.last_epoch = Some(epoch),
            Some(seen) if seen != epoch => {
                self.fly = Some(FlyTo::new(
                    self.viewport,
                    Viewport::focused_on(explorer.active_city()),
                    now,
                ));
                self.place_popup_open = false;
                self.city_popup_open = false;
                self.last_epoch = Some(epoch);
            }
            Some(_) => {}
        }
    }

    fn handle_pan_and_zoom(&mut self, ui: &egui::Ui, rect: egui::Rect, response: &egui::Response) {
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                self.fly = None;
                self.viewport.pan_pixels(delta.x as f64, delta.y as f64);
            }
        }
        if let Some(pointer) = response.hover_pos() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                self.fly = None;
                self.viewport.zoom_around(
                    scroll as f64 * SCROLL_ZOOM_SPEED,
                    (pointer.x - rect.center().x) as f64,
                    (pointer.y - rect.center().y) as f64,
                );
            }
        }
    }

    fn handle_click(
        &mut self,
        explorer: &mut PlaceExplorer,
        pointer: egui::Pos2,
        city_pos: egui::Pos2,
        markers: &[(egui::Pos2, &Place)],
    ) {
        // Topmost marker wins: markers are drawn in list order.
        for (pos, place) in markers.iter().rev() {
            let radius = if explorer.is_highlighted(place.id) {
                theme::PLACE_MARKER_RADIUS_HIGHLIGHTED
            } else {
                theme::PLACE_MARKER_RADIUS
            };
            if pos.distance(pointer) <= radius {
                explorer.select_place(place.id);
                self.place_popup_open = true;
                self.city_popup_open = false;
                return;
            }
        }
        if city_pos.distance(pointer) <= theme::CITY_MARKER_RADIUS {
            self.city_popup_open = true;
            self.place_popup_open = false;
            return;
        }
        // Background click closes popups; the highlight itself persists.
        self.place_popup_open = false;
        self.city_popup_open = false;
    }

    fn draw_tiles(
        &mut self,
        painter: &egui::Painter,
        rect: egui::Rect,
        cmd_tx: &Sender<WorkerCommand>,
        status: &mut String,
    ) {
        let zoom = tiles::tile_zoom(self.viewport.zoom);
        let scale = (self.viewport.zoom - zoom as f64).exp2();
        let (center_x, center_y) = mercator::project(self.viewport.center, self.viewport.zoom);
        let tile_px = (TILE_SIZE * scale) as f32;

        for tile in tiles::visible_tiles(&self.viewport, rect.width(), rect.height()) {
            let min = rect.center()
                + egui::vec2(
                    (tile.x as f64 * TILE_SIZE * scale - center_x) as f32,
                    (tile.y as f64 * TILE_SIZE * scale - center_y) as f32,
                );
            match self.tiles.get_mut(&tile) {
                Some(cached) => {
                    cached.last_used = self.frame;
                    if let TileState::Ready(texture) = &cached.state {
                        painter.image(
                            texture.id(),
                            egui::Rect::from_min_size(min, egui::vec2(tile_px, tile_px)),
                            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                            egui::Color32::WHITE,
                        );
                    }
                }
                None => {
                    if dispatch_tile_request(cmd_tx, tile, status) {
                        self.tiles.insert(
                            tile,
                            CachedTile {
                                state: TileState::Pending,
                                last_used: self.frame,
                            },
                        );
                    }
                }
            }
        }

        if self.tiles.len() > TILE_CACHE_CAP {
            let frame = self.frame;
            self.tiles
                .retain(|_, cached| frame.saturating_sub(cached.last_used) <= 1);
        }
    }

    fn show_zoom_controls(&mut self, ui: &egui::Ui, rect: egui::Rect) {
        egui::Area::new(ui.id().with("map-zoom-controls"))
            .fixed_pos(rect.min + egui::vec2(8.0, 8.0))
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        if ui.button(egui::RichText::new("+").monospace()).clicked() {
                            self.fly = None;
                            self.viewport.zoom_around(1.0, 0.0, 0.0);
                        }
                        if ui.button(egui::RichText::new("−").monospace()).clicked() {
                            self.fly = None;
                            self.viewport.zoom_around(-1.0, 0.0, 0.0);
                        }
                    });
                });
            });
    }

    fn to_screen(&self, rect: egui::Rect, point: GeoPoint) -> egui::Pos2 {
        let (cx, cy) = mercator::project(self.viewport.center, self.viewport.zoom);
        let (x, y) = mercator::project(point, self.viewport.zoom);
        rect.center() + egui::vec2((x - cx) as f32, (y - cy) as f32)
    }
}

fn draw_place_marker(painter: &egui::Painter, pos: egui::Pos2, radius: f32, color: egui::Color32) {
    painter.circle_filled(pos, radius, color);
    painter.circle_stroke(pos, radius, egui::Stroke::new(3.0, egui::Color32::WHITE));
    painter.circle_filled(pos, radius * 0.25, egui::Color32::WHITE);
}

fn draw_city_marker(painter: &egui::Painter, pos: egui::Pos2, pulse: f32) {
    let radius = theme::CITY_MARKER_RADIUS * pulse;
    painter.circle_filled(pos, radius, theme::CITY_MARKER_COLOR);
    painter.circle_stroke(pos, radius, egui::Stroke::new(3.0, egui::Color32::WHITE));
    // Inner square distinguishes the city center from place markers.
    painter.rect_filled(
        egui::Rect::from_center_size(pos, egui::vec2(radius * 0.6, radius * 0.6)),
        1.0,
        egui::Color32::WHITE,
    );
}

fn show_place_popup(ui: &egui::Ui, marker_pos: egui::Pos2, place: &Place) {
    egui::Area::new(ui.id().with(("place-popup", place.id.as_str())))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(marker_pos - egui::vec2(0.0, theme::PLACE_MARKER_RADIUS_HIGHLIGHTED + 6.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(220.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(place.name).strong());
                    widgets::category_badge(ui, place.category);
                });
                ui.label(egui::RichText::new(place.description).weak().size(12.0));
            });
        });
}

fn show_city_popup(ui: &egui::Ui, marker_pos: egui::Pos2, city: &City) {
    egui::Area::new(ui.id().with(("city-popup", city.id.as_str())))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(marker_pos - egui::vec2(0.0, theme::CITY_MARKER_RADIUS + 6.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(city.name).strong());
                    ui.label(egui::RichText::new(city.country).weak());
                    ui.label(egui::RichText::new("City Center").weak().size(11.0));
                });
            });
        });
}

fn show_attribution(ui: &egui::Ui, rect: egui::Rect) {
    egui::Area::new(ui.id().with("map-attribution"))
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .fixed_pos(rect.max - egui::vec2(4.0, 4.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200))
                .inner_margin(egui::Margin::symmetric(4, 1))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(OSM_ATTRIBUTION)
                            .color(egui::Color32::DARK_GRAY)
                            .size(10.0),
                    );
                });
        });
}
