//! Part registry: the five draggable facial features
//!
//! The set is closed and built once. Declaration order doubles as z-order:
//! later parts are drawn on top and win overlapping hit tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Number of parts in the registry
pub const PART_COUNT: usize = 5;

/// Stable identifier of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartId {
    LeftEye,
    RightEye,
    Mouth,
    LeftCheek,
    RightCheek,
}

impl PartId {
    /// All ids in declaration (z-) order
    pub const ALL: [PartId; PART_COUNT] = [
        PartId::LeftEye,
        PartId::RightEye,
        PartId::Mouth,
        PartId::LeftCheek,
        PartId::RightCheek,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartId::LeftEye => "leftEye",
            PartId::RightEye => "rightEye",
            PartId::Mouth => "mouth",
            PartId::LeftCheek => "leftCheek",
            PartId::RightCheek => "rightCheek",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Position in the declaration order
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn kind(&self) -> PartKind {
        match self {
            PartId::LeftEye | PartId::RightEye => PartKind::Eye,
            PartId::Mouth => PartKind::Mouth,
            PartId::LeftCheek | PartId::RightCheek => PartKind::Cheek,
        }
    }

    /// Correct placement on the planet face
    pub fn target(&self) -> Vec2 {
        match self {
            PartId::LeftEye => Vec2::new(320.0, 370.0),
            PartId::RightEye => Vec2::new(480.0, 370.0),
            PartId::Mouth => Vec2::new(400.0, 505.0),
            PartId::LeftCheek => Vec2::new(280.0, 480.0),
            PartId::RightCheek => Vec2::new(520.0, 480.0),
        }
    }

    /// Slot in the Ready-phase tray
    pub fn tray_position(&self) -> Vec2 {
        Vec2::new(TRAY_START_X + self.index() as f32 * TRAY_SPACING, TRAY_Y)
    }
}

/// Part type - decides hit radius and drawn shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    Eye,
    Mouth,
    Cheek,
}

/// A draggable part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    /// Current position (the only field that changes during play)
    pub pos: Vec2,
}

impl Part {
    fn new(id: PartId) -> Self {
        Self {
            id,
            pos: id.tray_position(),
        }
    }

    #[inline]
    pub fn id(&self) -> PartId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PartKind {
        self.id.kind()
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.id.target()
    }

    /// Distance from the current position to the target, in double precision
    #[inline]
    pub fn target_distance(&self) -> f64 {
        self.pos.as_dvec2().distance(self.target().as_dvec2())
    }
}

/// Fixed, ordered set of parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRegistry {
    parts: [Part; PART_COUNT],
}

impl Default for PartRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PartRegistry {
    /// All parts, laid out in the tray
    pub fn new() -> Self {
        Self {
            parts: PartId::ALL.map(Part::new),
        }
    }

    /// Parts in declaration (z-) order, bottom first
    #[inline]
    pub fn all(&self) -> &[Part] {
        &self.parts
    }

    #[inline]
    pub fn by_id(&self, id: PartId) -> &Part {
        &self.parts[id.index()]
    }

    #[inline]
    pub fn by_id_mut(&mut self, id: PartId) -> &mut Part {
        &mut self.parts[id.index()]
    }

    /// Look up a part by its text id. Panics on an unknown name.
    pub fn by_name(&self, name: &str) -> &Part {
        match PartId::from_name(name) {
            Some(id) => self.by_id(id),
            None => panic!("unknown part id: {name:?}"),
        }
    }

    /// Move every part back to its tray slot
    pub fn layout_tray(&mut self) {
        for part in &mut self.parts {
            part.pos = part.id.tray_position();
        }
    }

    /// Move every part through `f`, in declaration order
    pub fn reposition(&mut self, mut f: impl FnMut(PartId) -> Vec2) {
        for part in &mut self.parts {
            part.pos = f(part.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_matches_index() {
        let registry = PartRegistry::new();
        for (i, part) in registry.all().iter().enumerate() {
            assert_eq!(part.id().index(), i);
            assert_eq!(PartId::ALL[i], part.id());
        }
    }

    #[test]
    fn test_tray_layout_evenly_spaced() {
        let registry = PartRegistry::new();
        let xs: Vec<f32> = registry.all().iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![150.0, 280.0, 410.0, 540.0, 670.0]);
        assert!(registry.all().iter().all(|p| p.pos.y == 700.0));
    }

    #[test]
    fn test_kinds_and_targets() {
        let registry = PartRegistry::new();
        assert_eq!(registry.by_id(PartId::Mouth).kind(), PartKind::Mouth);
        assert_eq!(registry.by_id(PartId::RightCheek).kind(), PartKind::Cheek);
        assert_eq!(registry.by_id(PartId::LeftEye).target(), Vec2::new(320.0, 370.0));
    }

    #[test]
    fn test_name_round_trip() {
        for id in PartId::ALL {
            assert_eq!(PartId::from_name(id.as_str()), Some(id));
        }
        assert_eq!(PartId::from_name("nose"), None);
    }

    #[test]
    fn test_by_name() {
        let registry = PartRegistry::new();
        assert_eq!(registry.by_name("leftCheek").id(), PartId::LeftCheek);
    }

    #[test]
    #[should_panic(expected = "unknown part id")]
    fn test_by_name_unknown_panics() {
        PartRegistry::new().by_name("nose");
    }

    #[test]
    fn test_layout_tray_restores_positions() {
        let mut registry = PartRegistry::new();
        registry.reposition(|_| Vec2::new(1.0, 2.0));
        assert!(registry.all().iter().all(|p| p.pos == Vec2::new(1.0, 2.0)));
        registry.layout_tray();
        assert_eq!(registry, PartRegistry::new());
    }

    #[test]
    fn test_serializes_with_camel_case_ids() {
        let json = serde_json::to_string(&PartId::LeftEye).unwrap();
        assert_eq!(json, "\"leftEye\"");
    }
}
