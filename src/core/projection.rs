//! Karten-Projektion zwischen Geo- und Bildschirmkoordinaten.

use super::{GeoCoord, ScreenPoint};
use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI};

/// Umrechnung zwischen Geo-Koordinaten und Bildschirm-Pixeln.
pub trait Projection {
    /// Geo → Screen
    fn project(&self, loc: GeoCoord) -> ScreenPoint;

    /// Screen → Geo
    fn invert(&self, point: ScreenPoint) -> GeoCoord;
}

/// Sphärische Web-Mercator-Projektion mit Verschiebung (`translate`) und Zoom (`scale`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MercatorProjection {
    /// Pixel pro Radiant
    pub scale: f64,
    /// Bildschirmposition von (0°, 0°)
    pub translate: DVec2,
}

impl MercatorProjection {
    /// Minimaler Scale (ganze Welt auf wenigen Pixeln).
    pub const SCALE_MIN: f64 = 1.0;
    /// Maximaler Scale (entspricht grob Zoomstufe 24).
    pub const SCALE_MAX: f64 = 256.0 * (1u64 << 24) as f64 / (2.0 * PI);
    /// Breitengrad-Grenze der Web-Mercator-Projektion.
    const MAX_LATITUDE: f64 = 85.051_128_78;

    /// Erstellt eine Projektion.
    pub fn new(scale: f64, translate: DVec2) -> Self {
        Self {
            scale: scale.clamp(Self::SCALE_MIN, Self::SCALE_MAX),
            translate,
        }
    }

    /// Zentriert die Projektion so, dass `center` bei `screen_center` liegt.
    pub fn centered_on(center: GeoCoord, scale: f64, screen_center: Vec2) -> Self {
        let mut projection = Self::new(scale, DVec2::ZERO);
        let raw = projection.project_raw(center);
        projection.translate = screen_center.as_dvec2() - raw;
        projection
    }

    fn project_raw(&self, loc: GeoCoord) -> DVec2 {
        let lat = loc
            .y
            .clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE)
            .to_radians();
        let x = loc.x.to_radians() * self.scale;
        // Screen-Y wächst nach unten, daher negiert
        let y = -(FRAC_PI_4 + lat / 2.0).tan().ln() * self.scale;
        DVec2::new(x, y)
    }
}

impl Default for MercatorProjection {
    fn default() -> Self {
        Self::new(256.0 / (2.0 * PI), DVec2::new(128.0, 128.0))
    }
}

impl Projection for MercatorProjection {
    fn project(&self, loc: GeoCoord) -> ScreenPoint {
        (self.project_raw(loc) + self.translate).as_vec2()
    }

    fn invert(&self, point: ScreenPoint) -> GeoCoord {
        let raw = (point.as_dvec2() - self.translate) / self.scale;
        let lon = raw.x.to_degrees();
        let lat = (2.0 * (-raw.y).exp().atan() - PI / 2.0).to_degrees();
        DVec2::new(lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn city_projection() -> MercatorProjection {
        MercatorProjection::centered_on(
            DVec2::new(13.405, 52.52),
            (1u64 << 18) as f64 * 256.0 / (2.0 * PI),
            Vec2::new(400.0, 300.0),
        )
    }

    #[test]
    fn center_maps_to_screen_center() {
        let projection = city_projection();
        let screen = projection.project(DVec2::new(13.405, 52.52));
        assert_relative_eq!(screen.x, 400.0, epsilon = 0.01);
        assert_relative_eq!(screen.y, 300.0, epsilon = 0.01);
    }

    #[test]
    fn invert_reverses_project() {
        let projection = city_projection();
        let loc = projection.invert(Vec2::new(123.0, 456.0));
        let back = projection.project(loc);
        assert_relative_eq!(back.x, 123.0, epsilon = 0.01);
        assert_relative_eq!(back.y, 456.0, epsilon = 0.01);
    }

    #[test]
    fn north_is_up() {
        let projection = city_projection();
        let north = projection.project(DVec2::new(13.405, 52.53));
        assert!(north.y < 300.0);
    }

    #[test]
    fn scale_is_clamped() {
        let projection = MercatorProjection::new(0.0, DVec2::ZERO);
        assert_relative_eq!(projection.scale, MercatorProjection::SCALE_MIN);
    }
}
