//! The built-in dataset: three program cities and their points of interest.

use crate::domain::{Category, City, CityId, GeoPoint, Place, PlaceId};

pub const CITIES: &[City] = &[
    City {
        id: CityId("lisbon"),
        name: "Lisbon",
        country: "Portugal",
        center: GeoPoint::new(38.7223, -9.1393),
        zoom: 12,
        places: &[
            Place {
                id: PlaceId("belem-tower"),
                name: "Belém Tower",
                description: "Historic fortress and UNESCO World Heritage site",
                category: Category::Historic,
                location: GeoPoint::new(38.6916, -9.216),
            },
            Place {
                id: PlaceId("rossio-square"),
                name: "Rossio Square",
                description: "Central square with beautiful wave-pattern cobblestones",
                category: Category::Landmark,
                location: GeoPoint::new(38.7139, -9.1394),
            },
            Place {
                id: PlaceId("alfama"),
                name: "Alfama District",
                description: "Historic neighborhood with narrow streets and Fado music",
                category: Category::Cultural,
                location: GeoPoint::new(38.7139, -9.1333),
            },
            Place {
                id: PlaceId("lx-factory"),
                name: "LX Factory",
                description: "Creative hub with shops, restaurants, and art spaces",
                category: Category::Modern,
                location: GeoPoint::new(38.7041, -9.1758),
            },
        ],
    },
    City {
        id: CityId("munster"),
        name: "Münster",
        country: "Germany",
        center: GeoPoint::new(51.9607, 7.6261),
        zoom: 13,
        places: &[
            Place {
                id: PlaceId("prinzipalmarkt"),
                name: "Prinzipalmarkt",
                description: "Historic market square with gabled houses",
                category: Category::Historic,
                location: GeoPoint::new(51.9625, 7.6287),
            },
            Place {
                id: PlaceId("munster-cathedral"),
                name: "Münster Cathedral",
                description: "Gothic cathedral with astronomical clock",
                category: Category::Religious,
                location: GeoPoint::new(51.963, 7.6251),
            },
            Place {
                id: PlaceId("aasee"),
                name: "Aasee Lake",
                description: "Artificial lake perfect for recreation and cycling",
                category: Category::Nature,
                location: GeoPoint::new(51.9478, 7.6114),
            },
            Place {
                id: PlaceId("lwl-museum"),
                name: "LWL Museum",
                description: "Natural history museum with planetarium",
                category: Category::Cultural,
                location: GeoPoint::new(51.9542, 7.6058),
            },
        ],
    },
    City {
        id: CityId("castellon"),
        name: "Castellón",
        country: "Spain",
        center: GeoPoint::new(39.9864, -0.0513),
        zoom: 12,
        places: &[
            Place {
                id: PlaceId("fadrell-castle"),
                name: "Fadrell Castle",
                description: "Medieval castle ruins with panoramic views",
                category: Category::Historic,
                location: GeoPoint::new(39.9925, -0.0347),
            },
            Place {
                id: PlaceId("grau-beach"),
                name: "El Grau Beach",
                description: "Beautiful Mediterranean beach near the city",
                category: Category::Nature,
                location: GeoPoint::new(39.9775, -0.0347),
            },
            Place {
                id: PlaceId("mayor-square"),
                name: "Plaza Mayor",
                description: "Main square with City Hall and Santa María Cathedral",
                category: Category::Landmark,
                location: GeoPoint::new(39.9864, -0.0513),
            },
            Place {
                id: PlaceId("ribalta-park"),
                name: "Ribalta Park",
                description: "Large urban park perfect for relaxation",
                category: Category::Nature,
                location: GeoPoint::new(39.9889, -0.0444),
            },
        ],
    },
];
