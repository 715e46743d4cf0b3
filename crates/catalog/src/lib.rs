//! Read-only catalog of cities and their points of interest.
//!
//! The catalog is a compiled-in fixture: constructed once, immutable for the
//! process lifetime. There are no mutation operations.

use serde::Serialize;

pub mod data;
pub mod domain;

pub use domain::{Category, City, CityId, GeoPoint, Place, PlaceId};

/// Ordered, read-only collection of [`City`] records.
///
/// The city order is fixed and drives tab rendering in the UI. Looking up an
/// unknown id returns `None`; callers that only ever feed ids drawn from
/// [`Catalog::cities`] treat that as an invariant violation, not a
/// recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Catalog {
    cities: &'static [City],
}

impl Catalog {
    pub const fn new(cities: &'static [City]) -> Self {
        Self { cities }
    }

    /// The built-in three-city dataset (Lisbon, Münster, Castellón).
    pub const fn builtin() -> Self {
        Self::new(data::CITIES)
    }

    pub fn cities(&self) -> &'static [City] {
        self.cities
    }

    pub fn get(&self, id: CityId) -> Option<&'static City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// First city in catalog order; the UI's fixed starting city.
    pub fn default_city(&self) -> Option<&'static City> {
        self.cities.first()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Category, CityId, PlaceId};

    #[test]
    fn builtin_catalog_has_three_cities_in_fixed_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.cities().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["lisbon", "munster", "castellon"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn every_city_owns_four_places() {
        let catalog = Catalog::builtin();
        for city in catalog.cities() {
            assert_eq!(city.places.len(), 4, "city {}", city.id);
        }
    }

    #[test]
    fn default_city_is_lisbon() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.default_city().map(|c| c.id), Some(CityId("lisbon")));
    }

    #[test]
    fn lookup_by_id_and_unknown_id() {
        let catalog = Catalog::builtin();
        let munster = catalog.get(CityId("munster")).expect("munster exists");
        assert_eq!(munster.name, "Münster");
        assert_eq!(munster.country, "Germany");
        assert_eq!(munster.zoom, 13);
        assert!(catalog.get(CityId("atlantis")).is_none());
    }

    #[test]
    fn place_ids_are_unique_within_their_city() {
        let catalog = Catalog::builtin();
        for city in catalog.cities() {
            for (i, place) in city.places.iter().enumerate() {
                for other in &city.places[i + 1..] {
                    assert_ne!(place.id, other.id, "duplicate id in {}", city.id);
                }
            }
        }
    }

    #[test]
    fn city_place_lookup_resolves_owned_places_only() {
        let catalog = Catalog::builtin();
        let lisbon = catalog.get(CityId("lisbon")).expect("lisbon exists");
        let tower = lisbon.place(PlaceId("belem-tower")).expect("owned place");
        assert_eq!(tower.category, Category::Historic);
        assert!(lisbon.place(PlaceId("aasee")).is_none());
    }

    #[test]
    fn category_enumeration_is_closed_and_ordered() {
        assert_eq!(Category::ALL.len(), Category::COUNT);
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Historic",
                "Cultural",
                "Nature",
                "Modern",
                "Religious",
                "Landmark"
            ]
        );
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
