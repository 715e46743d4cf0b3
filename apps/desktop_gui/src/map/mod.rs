//! Slippy-map plumbing: web-mercator math, tile addressing, viewport state.

pub mod mercator;
pub mod tiles;
pub mod viewport;
