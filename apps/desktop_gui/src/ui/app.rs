//! Application shell: header, filter bar, map panel, place list, footer.

use catalog::CityId;
use crossbeam_channel::{Receiver, Sender};
use explorer_core::PlaceExplorer;

use crate::backend_bridge::commands::WorkerCommand;
use crate::controller::events::UiEvent;
use crate::ui::panels::{filter_bar, map_view::MapView, place_list};

pub const PROGRAM_WEBSITE_URL: &str = "https://mastergeotech.info/";
pub const SOURCE_REPOSITORY_URL: &str = "https://github.com/pkvartsianyi/geotech-map";

pub struct MapBrowserApp {
    cmd_tx: Sender<WorkerCommand>,
    ui_rx: Receiver<UiEvent>,

    explorer: PlaceExplorer,
    map: MapView,

    status: String,
}

impl MapBrowserApp {
    pub fn bootstrap(
        cmd_tx: Sender<WorkerCommand>,
        ui_rx: Receiver<UiEvent>,
        explorer: PlaceExplorer,
    ) -> Self {
        let map = MapView::new(explorer.active_city());
        Self {
            cmd_tx,
            ui_rx,
            explorer,
            map,
            status: "Starting tile worker...".to_string(),
        }
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.status.clear();
                }
                UiEvent::WorkerError(message) => {
                    self.status = message;
                }
                UiEvent::TileLoaded { tile, image } => {
                    self.map.on_tile_loaded(ctx, tile, image);
                }
                UiEvent::TileFailed { tile, .. } => {
                    // Reason already logged by the worker; the tile stays blank.
                    self.map.on_tile_failed(tile);
                }
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Geotech Places");
                    ui.label(
                        egui::RichText::new("Discover places in program cities")
                            .weak()
                            .size(12.0),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut switch_to: Option<CityId> = None;
                    // Right-to-left layout: iterate reversed to keep catalog order.
                    for city in self.explorer.catalog().cities().iter().rev() {
                        let active = self.explorer.active_city().id == city.id;
                        let button = if active {
                            egui::Button::new(egui::RichText::new(city.name).strong())
                                .fill(ui.visuals().selection.bg_fill)
                        } else {
                            egui::Button::new(city.name)
                        };
                        if ui.add(button).clicked() {
                            switch_to = Some(city.id);
                        }
                    }
                    if let Some(city_id) = switch_to {
                        self.explorer.select_city(city_id);
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_filter_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("filter-bar").show(ctx, |ui| {
            ui.add_space(4.0);
            filter_bar::show(ui, &mut self.explorer);
            ui.add_space(4.0);
        });
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.hyperlink_to("Program Website", PROGRAM_WEBSITE_URL);
                ui.hyperlink_to("GitHub", SOURCE_REPOSITORY_URL);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.status.is_empty() {
                        ui.label(
                            egui::RichText::new(
                                "Discover amazing places in Lisbon, Münster, and Castellón.",
                            )
                            .weak()
                            .size(11.0),
                        );
                    } else {
                        ui.label(
                            egui::RichText::new(&self.status)
                                .color(ui.visuals().warn_fg_color)
                                .size(11.0),
                        );
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn show_place_list(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("place-list")
            .default_width(300.0)
            .min_width(240.0)
            .show(ctx, |ui| {
                place_list::show(ui, &mut self.explorer);
            });
    }

    fn show_map(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.push_id("map-surface", |ui| {
                    self.map
                        .show(ui, &mut self.explorer, &self.cmd_tx, &mut self.status);
                });
            });
    }
}

impl eframe::App for MapBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);

        self.show_header(ctx);
        self.show_filter_bar(ctx);
        self.show_footer(ctx);
        self.show_place_list(ctx);
        self.show_map(ctx);

        // Animations and in-flight tiles want frequent frames; otherwise a
        // slow cadence keeps the marker pulse ticking cheaply.
        if self.map.is_animating() || self.map.has_pending_tiles() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
