//! Rein-mathematische Hilfsfunktionen: Distanzen und Nearest-Edge-Suche.

use super::{GeoCoord, MapNode, Projection, ScreenPoint};

/// Ergebnis der Nearest-Edge-Suche auf einem Linienzug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeChoice {
    /// Index des End-Vertex der gewählten Kante (Kante = `index - 1 .. index`)
    pub index: usize,
    /// Screen-Distanz zwischen Pointer und projiziertem Punkt
    pub distance: f32,
    /// Projizierter Punkt in Geo-Koordinaten
    pub loc: GeoCoord,
}

/// Euklidische Distanz zweier Bildschirmpunkte.
pub fn euclidean_distance(a: ScreenPoint, b: ScreenPoint) -> f32 {
    a.distance(b)
}

/// Nächster Punkt auf dem Segment `a..b` zu `point` (alles in Screen-Koordinaten).
///
/// Segmente der Länge 0 liefern `a`.
pub fn closest_point_on_segment(point: ScreenPoint, a: ScreenPoint, b: ScreenPoint) -> ScreenPoint {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }

    let t = (point - a).dot(ab) / len_sq;
    if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        a + ab * t
    }
}

/// Projiziert `point` auf die nächste Kante des Linienzugs `nodes`.
///
/// Die Suche läuft im Bildschirmraum, damit die Auswahl dem entspricht,
/// was der Benutzer sieht. Bei weniger als zwei Vertices gibt es keine Kante.
pub fn choose_edge(
    nodes: &[MapNode],
    point: ScreenPoint,
    projection: &dyn Projection,
) -> Option<EdgeChoice> {
    if nodes.len() < 2 {
        return None;
    }

    let points: Vec<ScreenPoint> = nodes.iter().map(|n| projection.project(n.loc)).collect();

    let mut best: Option<(usize, f32, ScreenPoint)> = None;
    for (i, pair) in points.windows(2).enumerate() {
        let p = closest_point_on_segment(point, pair[0], pair[1]);
        let d = euclidean_distance(p, point);
        match best {
            Some((_, min, _)) if d >= min => {}
            _ => best = Some((i + 1, d, p)),
        }
    }

    best.map(|(index, distance, p)| EdgeChoice {
        index,
        distance,
        loc: projection.invert(p),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MercatorProjection;
    use approx::assert_relative_eq;
    use glam::{DVec2, Vec2};

    /// Projektion, bei der 1 Grad genau 1 Pixel entspricht (nahe Äquator linear genug).
    struct PixelDegrees;

    impl Projection for PixelDegrees {
        fn project(&self, loc: GeoCoord) -> ScreenPoint {
            Vec2::new(loc.x as f32, loc.y as f32)
        }

        fn invert(&self, point: ScreenPoint) -> GeoCoord {
            DVec2::new(point.x as f64, point.y as f64)
        }
    }

    fn chain(coords: &[(f64, f64)]) -> Vec<MapNode> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| MapNode::new(i as u64 + 1, DVec2::new(x, y)))
            .collect()
    }

    #[test]
    fn closest_point_clamps_to_segment_ends() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Vec2::new(-5.0, 3.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(15.0, 3.0), a, b), b);
        assert_eq!(
            closest_point_on_segment(Vec2::new(4.0, 3.0), a, b),
            Vec2::new(4.0, 0.0)
        );
    }

    #[test]
    fn zero_length_segment_returns_start() {
        let a = Vec2::new(3.0, 3.0);
        assert_eq!(closest_point_on_segment(Vec2::new(9.0, 9.0), a, a), a);
    }

    #[test]
    fn choose_edge_picks_nearest_segment() {
        let nodes = chain(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let choice = choose_edge(&nodes, Vec2::new(12.0, 6.0), &PixelDegrees)
            .expect("Kante erwartet");

        assert_eq!(choice.index, 2);
        assert_relative_eq!(choice.distance, 2.0);
        assert_relative_eq!(choice.loc.x, 10.0);
        assert_relative_eq!(choice.loc.y, 6.0);
    }

    #[test]
    fn choose_edge_prefers_first_edge_on_tie() {
        let nodes = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let choice = choose_edge(&nodes, Vec2::new(10.0, 5.0), &PixelDegrees)
            .expect("Kante erwartet");
        assert_eq!(choice.index, 1);
    }

    #[test]
    fn choose_edge_needs_two_vertices() {
        let nodes = chain(&[(0.0, 0.0)]);
        assert!(choose_edge(&nodes, Vec2::ZERO, &PixelDegrees).is_none());
        assert!(choose_edge(&[], Vec2::ZERO, &PixelDegrees).is_none());
    }

    #[test]
    fn choose_edge_works_with_mercator() {
        let projection = MercatorProjection::centered_on(
            DVec2::new(8.0, 50.0),
            1_000_000.0,
            Vec2::new(400.0, 300.0),
        );
        let nodes = chain(&[(7.99, 50.0), (8.01, 50.0)]);
        let pointer = projection.project(DVec2::new(8.0, 50.0)) + Vec2::new(0.0, 5.0);

        let choice = choose_edge(&nodes, pointer, &projection).expect("Kante erwartet");
        assert_eq!(choice.index, 1);
        assert_relative_eq!(choice.distance, 5.0, epsilon = 0.01);
        assert_relative_eq!(choice.loc.y, 50.0, epsilon = 1e-6);
    }
}
