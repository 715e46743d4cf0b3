//! Command orchestration from UI actions to the tile worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::WorkerCommand;
use crate::map::tiles::TileId;

/// Queues a tile fetch. Returns `false` if the request was not queued; a
/// full queue is harmless (the tile is re-requested on a later frame), a
/// disconnected worker is surfaced through `status`.
pub fn dispatch_tile_request(
    cmd_tx: &Sender<WorkerCommand>,
    tile: TileId,
    status: &mut String,
) -> bool {
    match cmd_tx.try_send(WorkerCommand::FetchTile { tile }) {
        Ok(()) => {
            tracing::debug!(zoom = tile.zoom, x = tile.x, y = tile.y, "queued tile fetch");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::debug!(zoom = tile.zoom, x = tile.x, y = tile.y, "tile queue full, deferring");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Tile worker disconnected; map tiles unavailable".to_string();
            false
        }
    }
}
