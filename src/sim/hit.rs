//! Point-in-part hit testing
//!
//! Rule: the topmost hit wins. Parts are walked from the end of the z-order
//! back to the start, and the first whose hit circle strictly contains the
//! point is returned.

use glam::Vec2;

use super::part::{Part, PartKind, PartRegistry};
use super::state::GamePhase;
use crate::consts::*;

/// Hit radius for a part kind in the given phase
pub fn hit_radius(kind: PartKind, phase: GamePhase) -> f32 {
    match phase {
        // Placeholders are all the same size while placing
        GamePhase::Playing => PLAYING_HIT_RADIUS,
        GamePhase::Ready | GamePhase::Finished => match kind {
            PartKind::Eye => EYE_HIT_RADIUS,
            PartKind::Cheek => CHEEK_HIT_RADIUS,
            PartKind::Mouth => MOUTH_HIT_RADIUS,
        },
    }
}

/// Check whether `point` lies strictly inside a part's hit circle
#[inline]
pub fn part_contains(part: &Part, point: Vec2, phase: GamePhase) -> bool {
    let r = hit_radius(part.kind(), phase);
    part.pos.distance_squared(point) < r * r
}

/// Topmost part under `point`, if any
pub fn find_topmost(registry: &PartRegistry, point: Vec2, phase: GamePhase) -> Option<&Part> {
    registry
        .all()
        .iter()
        .rev()
        .find(|part| part_contains(part, point, phase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::part::PartId;
    use proptest::prelude::*;

    #[test]
    fn test_radius_table() {
        assert_eq!(hit_radius(PartKind::Mouth, GamePhase::Playing), 50.0);
        assert_eq!(hit_radius(PartKind::Eye, GamePhase::Playing), 50.0);
        assert_eq!(hit_radius(PartKind::Eye, GamePhase::Ready), 60.0);
        assert_eq!(hit_radius(PartKind::Cheek, GamePhase::Finished), 50.0);
        assert_eq!(hit_radius(PartKind::Mouth, GamePhase::Finished), 90.0);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let registry = PartRegistry::new();
        let eye = registry.by_id(PartId::LeftEye).pos;
        // Exactly on the radius: miss
        let edge = eye + Vec2::new(0.0, -50.0);
        assert!(find_topmost(&registry, edge, GamePhase::Playing).is_none());
        // Just inside
        let inside = eye + Vec2::new(0.0, -49.9);
        let hit = find_topmost(&registry, inside, GamePhase::Playing).map(Part::id);
        assert_eq!(hit, Some(PartId::LeftEye));
    }

    #[test]
    fn test_miss_returns_none() {
        let registry = PartRegistry::new();
        assert!(find_topmost(&registry, Vec2::new(0.0, 0.0), GamePhase::Ready).is_none());
    }

    #[test]
    fn test_later_part_wins_overlap() {
        let mut registry = PartRegistry::new();
        registry.by_id_mut(PartId::LeftCheek).pos = Vec2::new(300.0, 300.0);
        registry.by_id_mut(PartId::RightCheek).pos = Vec2::new(310.0, 300.0);
        let hit = find_topmost(&registry, Vec2::new(305.0, 300.0), GamePhase::Playing);
        assert_eq!(hit.map(Part::id), Some(PartId::RightCheek));
    }

    #[test]
    fn test_mouth_reach_depends_on_phase() {
        let registry = PartRegistry::new();
        let mouth = registry.by_id(PartId::Mouth).pos;
        // 70 units above the mouth's tray slot, clear of its neighbours
        let p = mouth + Vec2::new(0.0, -70.0);
        assert_eq!(
            find_topmost(&registry, p, GamePhase::Ready).map(Part::id),
            Some(PartId::Mouth)
        );
        assert!(find_topmost(&registry, p, GamePhase::Playing).is_none());
    }

    proptest! {
        #[test]
        fn prop_stacked_parts_resolve_to_last(x in 0.0f32..800.0, y in 0.0f32..800.0) {
            let mut registry = PartRegistry::new();
            registry.reposition(|_| Vec2::new(x, y));
            for phase in [GamePhase::Ready, GamePhase::Playing, GamePhase::Finished] {
                let hit = find_topmost(&registry, Vec2::new(x, y), phase).map(Part::id);
                prop_assert_eq!(hit, Some(PartId::RightCheek));
            }
        }

        #[test]
        fn prop_hit_is_within_radius(x in -100.0f32..900.0, y in -100.0f32..900.0) {
            let registry = PartRegistry::new();
            let point = Vec2::new(x, y);
            if let Some(part) = find_topmost(&registry, point, GamePhase::Playing) {
                prop_assert!(part.pos.distance(point) < PLAYING_HIT_RADIUS);
            }
        }
    }
}
