//! Viewport state and the eased fly-to animation used on city changes.

use catalog::{City, GeoPoint};

use crate::map::mercator;
use crate::map::tiles::{MAX_ZOOM, MIN_ZOOM};

/// Continuous map camera: center coordinate plus fractional zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Viewport {
    pub fn focused_on(city: &City) -> Self {
        Self {
            center: city.center,
            zoom: city.zoom as f64,
        }
    }

    /// Moves the center by a screen-pixel delta (drag panning).
    pub fn pan_pixels(&mut self, dx: f64, dy: f64) {
        let (x, y) = mercator::project(self.center, self.zoom);
        self.center = mercator::unproject(x - dx, y - dy, self.zoom);
        self.center.lat = self
            .center
            .lat
            .clamp(-mercator::MAX_LATITUDE, mercator::MAX_LATITUDE);
    }

    /// Zooms by `delta` keeping the coordinate under `(px, py)` (screen
    /// pixels relative to the viewport center) fixed.
    pub fn zoom_around(&mut self, delta: f64, px: f64, py: f64) {
        let anchor = {
            let (cx, cy) = mercator::project(self.center, self.zoom);
            mercator::unproject(cx + px, cy + py, self.zoom)
        };
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        let (ax, ay) = mercator::project(anchor, self.zoom);
        self.center = mercator::unproject(ax - px, ay - py, self.zoom);
    }
}

/// Animated transition to a city's center/zoom, started once per render
/// epoch. Mirrors the original map's 1.5 s eased fly-to.
#[derive(Debug, Clone, Copy)]
pub struct FlyTo {
    from: Viewport,
    to: Viewport,
    started_at: f64,
    duration: f64,
}

pub const FLY_TO_SECONDS: f64 = 1.5;

impl FlyTo {
    pub fn new(from: Viewport, to: Viewport, now: f64) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration: FLY_TO_SECONDS,
        }
    }

    /// Camera position at time `now`; the flag is `true` once the target is
    /// reached.
    pub fn at(&self, now: f64) -> (Viewport, bool) {
        let t = ((now - self.started_at) / self.duration).clamp(0.0, 1.0);
        let k = ease_in_out(t);
        let viewport = Viewport {
            center: GeoPoint::new(
                lerp(self.from.center.lat, self.to.center.lat, k),
                lerp(self.from.center.lon, self.to.center.lon, k),
            ),
            zoom: lerp(self.from.zoom, self.to.zoom, k),
        };
        (viewport, t >= 1.0)
    }
}

// Exact at both endpoints, which the fly-to relies on to park precisely on
// the target viewport.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Smoothstep easing.
fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
