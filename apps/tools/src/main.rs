use anyhow::{bail, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(
    name = "catalog-tools",
    about = "Inspect and export the built-in places catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog cities with their place counts.
    ListCities,
    /// Dump the full catalog as JSON.
    ExportJson,
    /// Dump places as a GeoJSON FeatureCollection.
    ExportGeojson {
        /// Restrict the export to one city id.
        #[arg(long)]
        city: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::builtin();
    match cli.command {
        Command::ListCities => {
            for city in catalog.cities() {
                println!(
                    "{:<12} {}, {} ({} places)",
                    city.id,
                    city.name,
                    city.country,
                    city.places.len()
                );
            }
        }
        Command::ExportJson => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::ExportGeojson { city } => {
            let doc = export_geojson(&catalog, city.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn export_geojson(catalog: &Catalog, only_city: Option<&str>) -> Result<serde_json::Value> {
    if let Some(id) = only_city {
        if !catalog.cities().iter().any(|c| c.id.as_str() == id) {
            bail!("unknown city '{id}'");
        }
    }

    let mut features = Vec::new();
    for city in catalog.cities() {
        if only_city.is_some_and(|id| id != city.id.as_str()) {
            continue;
        }
        for place in city.places {
            features.push(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    // GeoJSON positions are [lon, lat].
                    "coordinates": [place.location.lon, place.location.lat],
                },
                "properties": {
                    "id": place.id,
                    "name": place.name,
                    "description": place.description,
                    "category": place.category,
                    "city": city.id,
                },
            }));
        }
    }
    Ok(json!({
        "type": "FeatureCollection",
        "features": features,
    }))
}

#[cfg(test)]
mod tests {
    use super::{export_geojson, Catalog};

    #[test]
    fn exports_every_place_as_a_feature() {
        let doc = export_geojson(&Catalog::builtin(), None).expect("export succeeds");
        assert_eq!(doc["type"], "FeatureCollection");
        assert_eq!(doc["features"].as_array().map(Vec::len), Some(12));
    }

    #[test]
    fn city_filter_restricts_features_and_keeps_lon_lat_order() {
        let doc = export_geojson(&Catalog::builtin(), Some("lisbon")).expect("export succeeds");
        let features = doc["features"].as_array().expect("features array");
        assert_eq!(features.len(), 4);

        let belem = &features[0];
        assert_eq!(belem["properties"]["id"], "belem-tower");
        assert_eq!(belem["properties"]["category"], "historic");
        let coords = belem["geometry"]["coordinates"]
            .as_array()
            .expect("coordinates");
        assert_eq!(coords[0].as_f64(), Some(-9.216));
        assert_eq!(coords[1].as_f64(), Some(38.6916));
    }

    #[test]
    fn unknown_city_filter_is_an_error() {
        assert!(export_geojson(&Catalog::builtin(), Some("gotham")).is_err());
    }
}
