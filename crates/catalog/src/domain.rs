//! Domain types: cities, places, categories, coordinates.

use serde::Serialize;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(pub &'static str);

        impl $name {
            pub const fn as_str(self) -> &'static str {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

id_newtype!(CityId);
id_newtype!(PlaceId);

/// WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Closed enumeration of place kinds used for filtering and color-coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Historic,
    Cultural,
    Nature,
    Modern,
    Religious,
    Landmark,
}

impl Category {
    /// Fixed display ordering, shared by the filter bar and set iteration.
    pub const ALL: [Category; 6] = [
        Category::Historic,
        Category::Cultural,
        Category::Nature,
        Category::Modern,
        Category::Religious,
        Category::Landmark,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Historic => "Historic",
            Category::Cultural => "Cultural",
            Category::Nature => "Nature",
            Category::Modern => "Modern",
            Category::Religious => "Religious",
            Category::Landmark => "Landmark",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named point of interest, owned by exactly one [`City`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub location: GeoPoint,
}

/// A city with a center point, default zoom, and an ordered list of places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub id: CityId,
    pub name: &'static str,
    pub country: &'static str,
    pub center: GeoPoint,
    /// Default web-mercator zoom level when the city is focused.
    pub zoom: u8,
    pub places: &'static [Place],
}

impl City {
    pub fn place(&self, id: PlaceId) -> Option<&'static Place> {
        self.places.iter().find(|place| place.id == id)
    }
}
