//! Web-mercator projection between WGS84 degrees and world pixels.
//!
//! "World pixels" are the usual slippy-map coordinates: at zoom `z` the world
//! is a square of `TILE_SIZE * 2^z` pixels with the origin at the north-west
//! corner. Zoom is continuous; tile addressing floors it.

use catalog::GeoPoint;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// World side length in pixels at `zoom`.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Projects a coordinate to world pixels at `zoom`.
pub fn project(point: GeoPoint, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lon + 180.0) / 360.0 * size;
    let y = (1.0 - lat.tan().asinh() / std::f64::consts::PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: f64) -> GeoPoint {
    let size = world_size(zoom);
    let lon = x / size * 360.0 - 180.0;
    let lat = (std::f64::consts::PI * (1.0 - 2.0 * y / size))
        .sinh()
        .atan()
        .to_degrees();
    GeoPoint::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_meridian_is_the_world_center() {
        let (x, y) = project(GeoPoint::new(0.0, 0.0), 0.0);
        assert!((x - 128.0).abs() < 1e-9);
        assert!((y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_doubles_world_coordinates() {
        let p = GeoPoint::new(38.7223, -9.1393);
        let (x0, y0) = project(p, 3.0);
        let (x1, y1) = project(p, 4.0);
        assert!((x1 - 2.0 * x0).abs() < 1e-9);
        assert!((y1 - 2.0 * y0).abs() < 1e-9);
    }

    #[test]
    fn project_unproject_round_trips() {
        for p in [
            GeoPoint::new(38.7223, -9.1393),
            GeoPoint::new(51.9607, 7.6261),
            GeoPoint::new(39.9864, -0.0513),
            GeoPoint::new(-33.86, 151.21),
        ] {
            let (x, y) = project(p, 12.0);
            let back = unproject(x, y, 12.0);
            assert!((back.lat - p.lat).abs() < 1e-9, "lat for {p:?}");
            assert!((back.lon - p.lon).abs() < 1e-9, "lon for {p:?}");
        }
    }

    #[test]
    fn polar_latitudes_clamp_to_the_square_world() {
        let (_, y_top) = project(GeoPoint::new(89.9, 0.0), 0.0);
        let (_, y_limit) = project(GeoPoint::new(MAX_LATITUDE, 0.0), 0.0);
        assert!((y_top - y_limit).abs() < 1e-9);
        assert!(y_top >= 0.0);
    }
}
