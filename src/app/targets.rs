//! Auflösung der Platzierungsziele für Pointer-Bewegung und Klick.

use super::events::{Modifiers, PlacementTarget};
use super::session::DrawSession;
use crate::core::{FeatureSource, Projection, ScreenPoint};
use glam::Vec2;

/// Hilfspunkte für ein achsenparalleles Orthogonal-Segment.
///
/// Vom Anker `anchor` zum Pointer führen zwei Schenkel: erst horizontal bis
/// unter/über den Pointer (Eckpunkt), dann vertikal zum Pointer. Liegen Anker
/// und Pointer auf einer Achse, fällt der Eckpunkt mit einem von beiden zusammen.
pub fn orthogonal_aid_points(anchor: ScreenPoint, pointer: ScreenPoint) -> [ScreenPoint; 2] {
    [Vec2::new(pointer.x, anchor.y), pointer]
}

/// Bestimmt die Platzierungsziele an der aktuellen Pointer-Position.
///
/// - Alt gedrückt: ein Ziel ohne Feature (neuer Punkt auch über bestehenden Features)
/// - Orthogonal-Modus mit genau einem Anker: Eckpunkt + Pointer, jeweils per Hit-Test
/// - sonst: ein Ziel mit dem Feature unter dem Pointer
pub fn resolve_targets(
    pointer: ScreenPoint,
    modifiers: Modifiers,
    session: &DrawSession,
    features: &dyn FeatureSource,
    projection: &dyn Projection,
) -> Vec<PlacementTarget> {
    if modifiers.alt {
        return vec![PlacementTarget::empty(projection.invert(pointer), pointer)];
    }

    let resolve = |point: ScreenPoint| PlacementTarget {
        feature: features.hit_test(point, projection),
        loc: projection.invert(point),
        point,
    };

    match session.anchors() {
        [anchor] if session.is_orthogonal() => {
            let anchor_screen = projection.project(*anchor);
            orthogonal_aid_points(anchor_screen, pointer)
                .into_iter()
                .map(resolve)
                .collect()
        }
        _ => vec![resolve(pointer)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeatureRef, GeoCoord, MapNode, MapWay};
    use approx::assert_relative_eq;
    use glam::DVec2;

    struct Identity;

    impl Projection for Identity {
        fn project(&self, loc: GeoCoord) -> ScreenPoint {
            loc.as_vec2()
        }

        fn invert(&self, point: ScreenPoint) -> GeoCoord {
            point.as_dvec2()
        }
    }

    /// Jeder Punkt trifft denselben Node.
    struct AlwaysNode;

    impl FeatureSource for AlwaysNode {
        fn hit_test(&self, _point: ScreenPoint, _projection: &dyn Projection) -> Option<FeatureRef> {
            Some(FeatureRef::Node(MapNode::new(1, DVec2::ZERO)))
        }

        fn child_nodes(&self, _way: &MapWay) -> Vec<MapNode> {
            Vec::new()
        }
    }

    #[test]
    fn alt_ignores_feature_under_pointer() {
        let targets = resolve_targets(
            Vec2::new(10.0, 20.0),
            Modifiers::ALT,
            &DrawSession::new(),
            &AlwaysNode,
            &Identity,
        );

        assert_eq!(targets.len(), 1);
        assert!(targets[0].feature.is_none());
        assert_relative_eq!(targets[0].loc.x, 10.0);
        assert_relative_eq!(targets[0].loc.y, 20.0);
    }

    #[test]
    fn plain_pointer_uses_hit_test() {
        let targets = resolve_targets(
            Vec2::new(10.0, 20.0),
            Modifiers::NONE,
            &DrawSession::new(),
            &AlwaysNode,
            &Identity,
        );

        assert_eq!(targets.len(), 1);
        assert!(matches!(targets[0].feature, Some(FeatureRef::Node(_))));
    }

    #[test]
    fn orthogonal_with_one_anchor_yields_corner_and_pointer() {
        let mut session = DrawSession::new();
        session.enter_orthogonal();
        session.push_anchor(DVec2::new(100.0, 100.0));

        let targets = resolve_targets(
            Vec2::new(180.0, 40.0),
            Modifiers::NONE,
            &session,
            &AlwaysNode,
            &Identity,
        );

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].point, Vec2::new(180.0, 100.0));
        assert_eq!(targets[1].point, Vec2::new(180.0, 40.0));
        assert!(targets.iter().all(|t| t.feature.is_some()));
    }

    #[test]
    fn orthogonal_with_two_anchors_is_single_target() {
        let mut session = DrawSession::new();
        session.enter_orthogonal();
        session.push_anchor(DVec2::ZERO);
        session.push_anchor(DVec2::ONE);

        let targets = resolve_targets(
            Vec2::new(5.0, 5.0),
            Modifiers::NONE,
            &session,
            &AlwaysNode,
            &Identity,
        );
        assert_eq!(targets.len(), 1);
    }
}
