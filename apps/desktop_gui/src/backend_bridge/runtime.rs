//! Background tile worker: owns a tokio runtime and an HTTP client, fetches
//! and decodes raster tiles, and reports results back over the UI channel.

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;

use crate::backend_bridge::commands::WorkerCommand;
use crate::controller::events::{TileImage, UiEvent};

#[derive(Debug, Clone)]
pub struct TileWorkerConfig {
    /// URL template with `{z}`, `{x}`, `{y}` placeholders.
    pub url_template: String,
}

/// Identify ourselves to the tile service; public OSM servers reject
/// anonymous default agents.
const USER_AGENT: &str = concat!("geotech-places-desktop/", env!("CARGO_PKG_VERSION"));

pub fn launch(config: TileWorkerConfig, cmd_rx: Receiver<WorkerCommand>, ui_tx: Sender<UiEvent>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerError(format!(
                    "tile worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build tile worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = match HttpClient::builder().user_agent(USER_AGENT).build() {
                Ok(client) => client,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::WorkerError(format!(
                        "tile worker startup failure: failed to build HTTP client: {err}"
                    )));
                    tracing::error!("failed to build tile worker HTTP client: {err}");
                    return;
                }
            };

            let _ = ui_tx.try_send(UiEvent::WorkerReady);
            tracing::info!(template = %config.url_template, "tile worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    WorkerCommand::FetchTile { tile } => {
                        let url = tile.url(&config.url_template);
                        let client = client.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            match fetch_and_decode(&client, &url).await {
                                Ok(image) => {
                                    let _ = ui_tx.try_send(UiEvent::TileLoaded { tile, image });
                                }
                                Err(err) => {
                                    tracing::warn!(%url, "tile fetch failed: {err:#}");
                                    let _ = ui_tx.try_send(UiEvent::TileFailed {
                                        tile,
                                        reason: format!("{err:#}"),
                                    });
                                }
                            }
                        });
                    }
                }
            }
            tracing::info!("tile worker shutting down: UI command channel closed");
        });
    });
}

async fn fetch_and_decode(client: &HttpClient, url: &str) -> Result<TileImage> {
    let response = client
        .get(url)
        .send()
        .await
        .context("failed to reach tile server")?
        .error_for_status()
        .context("tile server returned an error status")?;
    let bytes = response
        .bytes()
        .await
        .context("failed to read tile body")?;
    let decoded = image::load_from_memory(&bytes)
        .context("failed to decode tile image")?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(TileImage {
        size: [width as usize, height as usize],
        rgba: decoded.into_raw(),
    })
}
