use anyhow::{anyhow, bail};
use catalog::{Catalog, CityId};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use explorer_core::PlaceExplorer;

mod backend_bridge;
mod controller;
mod map;
mod ui;

use backend_bridge::commands::WorkerCommand;
use backend_bridge::runtime::TileWorkerConfig;
use controller::events::UiEvent;
use map::tiles::DEFAULT_TILE_URL_TEMPLATE;
use ui::MapBrowserApp;

#[derive(Parser, Debug)]
#[command(name = "geotech-places", about = "Desktop map browser for the program cities")]
struct Cli {
    /// Tile server URL template with {z}, {x}, {y} placeholders.
    #[arg(long, default_value = DEFAULT_TILE_URL_TEMPLATE)]
    tile_url: String,

    /// Catalog id of the city to open at startup (e.g. "lisbon").
    #[arg(long)]
    city: Option<String>,
}

/// Maps a user-supplied city name to a catalog id, listing the valid ids on
/// failure.
fn resolve_start_city(catalog: &Catalog, name: &str) -> anyhow::Result<CityId> {
    if let Some(city) = catalog.cities().iter().find(|c| c.id.as_str() == name) {
        return Ok(city.id);
    }
    let known: Vec<&str> = catalog.cities().iter().map(|c| c.id.as_str()).collect();
    bail!("unknown city '{name}', expected one of: {}", known.join(", "))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin();
    let explorer = match &cli.city {
        Some(name) => {
            PlaceExplorer::with_start_city(catalog, resolve_start_city(&catalog, name)?)?
        }
        None => PlaceExplorer::new(catalog)?,
    };

    let (cmd_tx, cmd_rx) = bounded::<WorkerCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(
        TileWorkerConfig {
            url_template: cli.tile_url,
        },
        cmd_rx,
        ui_tx,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Geotech Places")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Geotech Places",
        options,
        Box::new(move |_cc| Ok(Box::new(MapBrowserApp::bootstrap(cmd_tx, ui_rx, explorer)))),
    )
    .map_err(|err| anyhow!("failed to run desktop shell: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{resolve_start_city, Catalog};

    #[test]
    fn resolves_catalog_city_ids() {
        let catalog = Catalog::builtin();
        let id = resolve_start_city(&catalog, "castellon").expect("known city");
        assert_eq!(id.as_str(), "castellon");
    }

    #[test]
    fn rejects_unknown_city_names_with_the_valid_ids() {
        let catalog = Catalog::builtin();
        let err = resolve_start_city(&catalog, "gotham").expect_err("unknown city");
        let message = err.to_string();
        assert!(message.contains("gotham"));
        assert!(message.contains("lisbon"));
        assert!(message.contains("munster"));
        assert!(message.contains("castellon"));
    }
}
