//! Pointer input and the in-progress drag
//!
//! Input arrives one event at a time from a single pointer (mouse or the
//! first touch contact).

use glam::Vec2;

use super::part::{Part, PartId};

/// A pointer sample in canvas-logical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed / first contact started
    Down(Vec2),
    /// Pointer moved (dragging or hovering)
    Move(Vec2),
    /// Button released / contact ended
    Up,
    /// Pointer left the surface
    Leave,
    /// Platform cancelled the contact
    Cancel,
}

impl PointerEvent {
    /// Up, Leave and Cancel all end a drag
    #[inline]
    pub fn is_release(&self) -> bool {
        matches!(self, PointerEvent::Up | PointerEvent::Leave | PointerEvent::Cancel)
    }
}

/// Cursor affordance reported back to the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Hovering a draggable part
    Grab,
    /// A part is being dragged
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// The part currently being dragged and where it was grabbed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub part: PartId,
    /// Pointer position minus part position at grab time
    pub offset: Vec2,
}

impl DragSession {
    /// Grab `part` with the pointer at `point`
    pub fn grab(part: &Part, point: Vec2) -> Self {
        Self {
            part: part.id(),
            offset: point - part.pos,
        }
    }

    /// Where the dragged part goes when the pointer is at `point`
    #[inline]
    pub fn follow(&self, point: Vec2) -> Vec2 {
        point - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::part::PartRegistry;

    #[test]
    fn test_offset_preserved_while_following() {
        let registry = PartRegistry::new();
        let eye = registry.by_id(PartId::LeftEye);
        let session = DragSession::grab(eye, eye.pos + Vec2::new(10.0, -5.0));
        assert_eq!(session.offset, Vec2::new(10.0, -5.0));
        assert_eq!(session.follow(Vec2::new(110.0, 95.0)), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_follow_is_unclamped() {
        let registry = PartRegistry::new();
        let mouth = registry.by_id(PartId::Mouth);
        let session = DragSession::grab(mouth, mouth.pos);
        assert_eq!(session.follow(Vec2::new(-300.0, 1200.0)), Vec2::new(-300.0, 1200.0));
    }

    #[test]
    fn test_release_classification() {
        assert!(PointerEvent::Up.is_release());
        assert!(PointerEvent::Leave.is_release());
        assert!(PointerEvent::Cancel.is_release());
        assert!(!PointerEvent::Down(Vec2::ZERO).is_release());
        assert!(!PointerEvent::Move(Vec2::ZERO).is_release());
    }

    #[test]
    fn test_cursor_css() {
        assert_eq!(Cursor::default().as_css(), "default");
        assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
    }
}
