//! Commands queued from UI to the tile worker.

use crate::map::tiles::TileId;

pub enum WorkerCommand {
    FetchTile { tile: TileId },
}
