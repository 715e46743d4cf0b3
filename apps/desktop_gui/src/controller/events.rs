//! Events flowing from the tile worker back to the UI thread.

use crate::map::tiles::TileId;

/// Decoded RGBA tile ready for texture upload.
pub struct TileImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

pub enum UiEvent {
    WorkerReady,
    /// Worker could not start; the map degrades to blank tiles.
    WorkerError(String),
    TileLoaded {
        tile: TileId,
        image: TileImage,
    },
    /// A failed tile stays blank; it is not retried in a loop.
    TileFailed {
        tile: TileId,
        reason: String,
    },
}
