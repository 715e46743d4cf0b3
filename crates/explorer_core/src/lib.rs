//! Selection/filter controller for the places map browser.
//!
//! [`PlaceExplorer`] owns the single mutable piece of UI state (active city,
//! active category filter, highlighted place, render epoch) and derives the
//! visible-place view from it on every read. Presentation surfaces (map and
//! list) are read-only observers that feed user interactions back through
//! the operations below; all transitions are synchronous and total.

use catalog::{Catalog, Category, City, CityId, Place, PlaceId};
use thiserror::Error;

mod category_set;

pub use category_set::CategorySet;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("catalog contains no cities")]
    EmptyCatalog,
    #[error("unknown start city '{0}'")]
    UnknownCity(CityId),
}

/// Flat, always-valid selection state over a read-only [`Catalog`].
///
/// Every operation is a total function from (state, input) to a new valid
/// state; there is no terminal state. The derived visible-place view is
/// recomputed on demand and never cached (the dataset is small and static).
#[derive(Debug, Clone)]
pub struct PlaceExplorer {
    catalog: Catalog,
    active_city: &'static City,
    active_categories: CategorySet,
    highlighted_place: Option<PlaceId>,
    render_epoch: u64,
}

impl PlaceExplorer {
    /// Starts at the catalog's default city with every category active.
    pub fn new(catalog: Catalog) -> Result<Self, ExplorerError> {
        let city = catalog.default_city().ok_or(ExplorerError::EmptyCatalog)?;
        Ok(Self {
            catalog,
            active_city: city,
            active_categories: CategorySet::all(),
            highlighted_place: None,
            render_epoch: 0,
        })
    }

    /// Like [`PlaceExplorer::new`] but starting on `city_id`.
    pub fn with_start_city(catalog: Catalog, city_id: CityId) -> Result<Self, ExplorerError> {
        let mut explorer = Self::new(catalog)?;
        explorer.active_city = catalog
            .get(city_id)
            .ok_or(ExplorerError::UnknownCity(city_id))?;
        Ok(explorer)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_city(&self) -> &'static City {
        self.active_city
    }

    pub fn active_categories(&self) -> CategorySet {
        self.active_categories
    }

    pub fn highlighted_place_id(&self) -> Option<PlaceId> {
        self.highlighted_place
    }

    /// The highlighted place resolved within the active city, independent of
    /// the current category filter. A stale id left over from another city
    /// resolves to `None`.
    pub fn highlighted_place(&self) -> Option<&'static Place> {
        self.highlighted_place
            .and_then(|id| self.active_city.place(id))
    }

    pub fn is_highlighted(&self, place_id: PlaceId) -> bool {
        self.highlighted_place == Some(place_id)
    }

    /// Monotonic counter bumped on every city change. The map surface keys a
    /// full recenter/rezoom on it; category-only changes leave it untouched.
    pub fn render_epoch(&self) -> u64 {
        self.render_epoch
    }

    /// Switches the active city, clearing the highlight and bumping the
    /// render epoch. The category filter deliberately persists across city
    /// switches. Re-selecting the current city behaves like any other switch
    /// (the original UI re-flies the map when the active tab is clicked).
    ///
    /// An id not present in the catalog cannot arise through the sanctioned
    /// entry points (the UI only offers ids drawn from the catalog listing),
    /// so it is treated as an invariant violation: asserted in debug builds,
    /// ignored in release.
    pub fn select_city(&mut self, city_id: CityId) {
        let Some(city) = self.catalog.get(city_id) else {
            debug_assert!(false, "select_city called with unknown city id '{city_id}'");
            tracing::warn!(city = %city_id, "ignoring select_city for unknown city id");
            return;
        };
        self.active_city = city;
        self.highlighted_place = None;
        self.render_epoch += 1;
    }

    /// Adds `category` to the filter if absent, removes it otherwise.
    pub fn toggle_category(&mut self, category: Category) {
        self.active_categories.toggle(category);
    }

    pub fn select_all_categories(&mut self) {
        self.active_categories = CategorySet::all();
    }

    /// Empties the filter. The resulting empty visible set is a valid state,
    /// rendered as an explicit "no results" condition by the list surface.
    pub fn clear_categories(&mut self) {
        self.active_categories = CategorySet::empty();
    }

    /// Highlights a place. Deliberately permissive: no validation against
    /// the active city or the current filter, so a place stays selected even
    /// while temporarily filtered out. Resolution happens at read time via
    /// [`PlaceExplorer::highlighted_place`].
    pub fn select_place(&mut self, place_id: PlaceId) {
        self.highlighted_place = Some(place_id);
    }

    /// The active city's places whose category is currently active, in the
    /// city's original order.
    pub fn visible_places(&self) -> Vec<&'static Place> {
        self.active_city
            .places
            .iter()
            .filter(|place| self.active_categories.contains(place.category))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.active_city
            .places
            .iter()
            .filter(|place| self.active_categories.contains(place.category))
            .count()
    }

    /// Total place count of the active city, ignoring the filter.
    pub fn place_count(&self) -> usize {
        self.active_city.places.len()
    }

    /// How many of the active city's places carry `category`, ignoring the
    /// filter. Drives the "(n)" suffix on the filter chips.
    pub fn category_count(&self, category: Category) -> usize {
        self.active_city
            .places
            .iter()
            .filter(|place| place.category == category)
            .count()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
