//! Panels: the map surface, the place list, and the filter bar.

pub mod filter_bar;
pub mod map_view;
pub mod place_list;
