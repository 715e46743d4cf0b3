//! Bridge between the egui thread and the background tile-fetch worker.

pub mod commands;
pub mod runtime;
