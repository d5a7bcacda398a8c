//! Shape generation for a frame
//!
//! Builds a backend-independent list of 2D primitives, painter's order.

use glam::Vec2;
use std::f32::consts::PI;

use super::{FrameView, PartView, RenderMode};
use crate::consts::{PLANET_CENTER, PLANET_RADIUS};
use crate::settings::Locale;
use crate::sim::PartKind;

pub type Color = [f32; 4];

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.286, 0.247, 0.51, 1.0];
    pub const PLANET: Color = [0.545, 0.91, 0.886, 1.0];
    pub const OUTLINE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const RING: Color = [1.0, 1.0, 1.0, 1.0];
    pub const EYE_WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const IRIS: Color = [1.0, 0.388, 0.278, 1.0];
    pub const PUPIL: Color = [0.0, 0.0, 0.0, 1.0];
    pub const HIGHLIGHT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const MOUTH: Color = [0.2, 0.2, 0.2, 1.0];
    pub const CHEEK: Color = [1.0, 0.412, 0.529, 0.9];
    pub const PLACEHOLDER: Color = [0.0, 0.0, 0.0, 0.5];
    pub const PLACEHOLDER_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TARGET_MARKER: Color = [0.0, 1.0, 0.0, 1.0];
    pub const OVERLAY: Color = [0.0, 0.0, 0.0, 0.4];
    pub const OVERLAY_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// CSS `rgba()` string for a color
pub fn css_color(c: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(c[0]),
        channel(c[1]),
        channel(c[2]),
        c[3].clamp(0.0, 1.0)
    )
}

/// How a closed shape or path is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke { color: Color, width: f32, dashed: bool },
}

impl Paint {
    fn outline(width: f32) -> Self {
        Paint::Stroke {
            color: colors::OUTLINE,
            width,
            dashed: false,
        }
    }
}

/// A 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { origin: Vec2, size: Vec2, color: Color },
    Ellipse { center: Vec2, radii: Vec2, paint: Paint },
    /// Open arc (clockwise from `start` to `end`, canvas angle convention)
    Arc { center: Vec2, radius: f32, start: f32, end: f32, color: Color, width: f32 },
    Text { pos: Vec2, text: String, size: f32, color: Color },
}

impl Shape {
    fn circle(center: Vec2, radius: f32, paint: Paint) -> Self {
        Shape::Ellipse {
            center,
            radii: Vec2::splat(radius),
            paint,
        }
    }
}

/// Radius of the "?" placeholder disc
const PLACEHOLDER_RADIUS: f32 = 50.0;
/// Half-height of the eye white
const EYE_RADIUS: f32 = 60.0;
const MOUTH_WIDTH: f32 = 180.0;
const CHEEK_RADII: Vec2 = Vec2::new(50.0, 24.0);
/// Ring is a circle of this many planet radii, squashed vertically
const RING_SCALE: f32 = 1.6;
const RING_SQUASH: f32 = 0.3;

/// Full scene for a frame
pub fn scene(frame: &FrameView, locale: Locale, surface: Vec2) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(32);
    shapes.push(Shape::Rect {
        origin: Vec2::ZERO,
        size: surface,
        color: colors::BACKGROUND,
    });
    planet(&mut shapes, 1.0);

    for marker in &frame.targets {
        target_marker(&mut shapes, marker);
    }
    for part in &frame.parts {
        part_shapes(&mut shapes, part, frame.mode, 1.0);
    }

    if frame.overlay {
        shapes.push(Shape::Rect {
            origin: Vec2::ZERO,
            size: surface,
            color: colors::OVERLAY,
        });
        shapes.push(Shape::Text {
            pos: surface / 2.0,
            text: locale.start_prompt().to_string(),
            size: 48.0,
            color: colors::OVERLAY_TEXT,
        });
    }

    shapes
}

/// Solved face drawn at `scale` (the answer card)
pub fn answer_scene(scale: f32, surface: Vec2) -> Vec<Shape> {
    let size = surface * scale;
    let mut shapes = vec![Shape::Rect {
        origin: Vec2::ZERO,
        size,
        color: colors::BACKGROUND,
    }];
    planet(&mut shapes, scale);
    for part in &FrameView::solved().parts {
        part_shapes(&mut shapes, part, RenderMode::Revealed, scale);
    }
    shapes
}

/// Planet disc behind a squashed ring
fn planet(shapes: &mut Vec<Shape>, scale: f32) {
    let center = PLANET_CENTER * scale;
    let r = PLANET_RADIUS * scale;
    let ring_r = r * RING_SCALE;
    let band = 17.0 * scale;
    let ring = |radius: f32| Vec2::new(radius, radius * RING_SQUASH);

    shapes.push(Shape::Ellipse {
        center,
        radii: ring(ring_r),
        paint: Paint::Stroke {
            color: colors::RING,
            width: 35.0 * scale * RING_SQUASH,
            dashed: false,
        },
    });
    for edge in [ring_r + band, ring_r - band] {
        shapes.push(Shape::Ellipse {
            center,
            radii: ring(edge),
            paint: Paint::outline(8.0 * scale * RING_SQUASH),
        });
    }

    shapes.push(Shape::circle(center, r, Paint::Fill(colors::PLANET)));
    shapes.push(Shape::circle(center, r, Paint::outline(8.0 * scale)));
}

fn part_shapes(shapes: &mut Vec<Shape>, part: &PartView, mode: RenderMode, scale: f32) {
    let c = part.pos * scale;
    if mode == RenderMode::Placeholder {
        shapes.push(Shape::circle(
            c,
            PLACEHOLDER_RADIUS * scale,
            Paint::Fill(colors::PLACEHOLDER),
        ));
        shapes.push(Shape::Text {
            pos: c,
            text: "?".to_string(),
            size: 24.0 * scale,
            color: colors::PLACEHOLDER_TEXT,
        });
        return;
    }

    match part.kind {
        PartKind::Eye => {
            let r = EYE_RADIUS * scale;
            let white = Vec2::new(r * 0.75, r);
            let pupil = Vec2::new(r * 0.28, r * 0.4);
            shapes.push(Shape::Ellipse { center: c, radii: white, paint: Paint::Fill(colors::EYE_WHITE) });
            shapes.push(Shape::Ellipse { center: c, radii: white, paint: Paint::outline(8.0 * scale) });
            shapes.push(Shape::Ellipse {
                center: c,
                radii: Vec2::new(r * 0.5, r * 0.7),
                paint: Paint::Fill(colors::IRIS),
            });
            shapes.push(Shape::Ellipse { center: c, radii: pupil, paint: Paint::Fill(colors::PUPIL) });
            shapes.push(Shape::circle(
                c - Vec2::new(pupil.x * 0.7, pupil.y * 0.5),
                r * 0.2,
                Paint::Fill(colors::HIGHLIGHT),
            ));
        }
        PartKind::Mouth => shapes.push(Shape::Arc {
            center: c - Vec2::new(0.0, 10.0 * scale),
            radius: MOUTH_WIDTH / 2.0 * scale,
            start: 0.0,
            end: PI,
            color: colors::MOUTH,
            width: 12.0 * scale,
        }),
        PartKind::Cheek => shapes.push(Shape::Ellipse {
            center: c,
            radii: CHEEK_RADII * scale,
            paint: Paint::Fill(colors::CHEEK),
        }),
    }
}

/// Dashed outline at a part's correct position
fn target_marker(shapes: &mut Vec<Shape>, marker: &PartView) {
    let radii = match marker.kind {
        PartKind::Eye => Vec2::new(45.0, 60.0),
        PartKind::Cheek => CHEEK_RADII,
        PartKind::Mouth => Vec2::splat(90.0),
    };
    shapes.push(Shape::Ellipse {
        center: marker.pos,
        radii,
        paint: Paint::Stroke {
            color: colors::TARGET_MARKER,
            width: 6.0,
            dashed: true,
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameSession, PartId};

    const SURFACE: Vec2 = Vec2::new(800.0, 800.0);

    fn count_text(shapes: &[Shape], needle: &str) -> usize {
        shapes
            .iter()
            .filter(|s| matches!(s, Shape::Text { text, .. } if text == needle))
            .count()
    }

    fn dashed(shapes: &[Shape]) -> Vec<&Shape> {
        shapes
            .iter()
            .filter(|s| matches!(s, Shape::Ellipse { paint: Paint::Stroke { dashed: true, .. }, .. }))
            .collect()
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color([1.0, 0.0, 0.0, 0.5]), "rgba(255, 0, 0, 0.5)");
        assert_eq!(css_color(colors::BACKGROUND), "rgba(73, 63, 130, 1)");
    }

    #[test]
    fn test_ready_scene_has_overlay_prompt() {
        let frame = FrameView::capture(&GameSession::new(1));
        let shapes = scene(&frame, Locale::Ja, SURFACE);
        assert_eq!(count_text(&shapes, "スタートボタンを押してね！"), 1);
        assert_eq!(count_text(&shapes, "?"), 0);
        assert!(dashed(&shapes).is_empty());
    }

    #[test]
    fn test_playing_scene_uses_placeholders() {
        let mut session = GameSession::new(2);
        session.start();
        let shapes = scene(&FrameView::capture(&session), Locale::En, SURFACE);
        assert_eq!(count_text(&shapes, "?"), 5);
        assert_eq!(count_text(&shapes, "Press Start!"), 0);
    }

    #[test]
    fn test_finished_scene_marks_targets() {
        let mut session = GameSession::new(3);
        session.start();
        session.finish();
        let shapes = scene(&FrameView::capture(&session), Locale::Ja, SURFACE);
        let markers = dashed(&shapes);
        assert_eq!(markers.len(), 5);
        let mouth_marker = markers
            .iter()
            .find(|s| matches!(s, Shape::Ellipse { center, .. } if *center == PartId::Mouth.target()));
        assert!(matches!(
            mouth_marker,
            Some(Shape::Ellipse { radii, .. }) if *radii == Vec2::splat(90.0)
        ));
        assert_eq!(count_text(&shapes, "?"), 0);
    }

    #[test]
    fn test_answer_scene_is_scaled() {
        let shapes = answer_scene(0.5, SURFACE);
        assert!(matches!(
            shapes.first(),
            Some(Shape::Rect { size, .. }) if *size == Vec2::new(400.0, 400.0)
        ));
        // Left cheek drawn at half its target coordinates
        assert!(shapes.iter().any(|s| matches!(
            s,
            Shape::Ellipse { center, radii, .. }
                if *center == Vec2::new(140.0, 240.0) && *radii == Vec2::new(25.0, 12.0)
        )));
    }
}
