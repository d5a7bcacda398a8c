//! Planet Face - drag the facial features onto the planet
//!
//! Core modules:
//! - `sim`: Game logic (part registry, hit testing, dragging, scoring, phases)
//! - `renderer`: Per-frame snapshot and Canvas 2D drawing
//! - `settings`: Runtime configuration (locale, seed, answer card, spawn margin)

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Locale, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play surface dimensions (canvas-logical units). Targets, tray and planet are laid out for this size.
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 800.0;
    pub const SURFACE: Vec2 = Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT);

    /// Random spawn positions stay this far inside every edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Tray layout: first slot x, spacing between slots, shared baseline y
    pub const TRAY_START_X: f32 = 150.0;
    pub const TRAY_SPACING: f32 = 130.0;
    pub const TRAY_Y: f32 = 700.0;

    /// Uniform hit radius while parts are being placed
    pub const PLAYING_HIT_RADIUS: f32 = 50.0;
    /// Type-dependent hit radii outside of Playing
    pub const EYE_HIT_RADIUS: f32 = 60.0;
    pub const CHEEK_HIT_RADIUS: f32 = 50.0;
    pub const MOUTH_HIT_RADIUS: f32 = 90.0;

    /// Distance at which a part's proximity score reaches zero
    pub const MAX_DISTANCE: f32 = 100.0;

    /// Planet disc drawn at the surface center
    pub const PLANET_CENTER: Vec2 = Vec2::new(400.0, 400.0);
    pub const PLANET_RADIUS: f32 = 250.0;
}

/// Map a pointer position in client (CSS pixel) space onto the canvas-logical surface.
///
/// `rect_origin`/`rect_size` are the element's bounding rect, `surface` its backing size.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_origin: Vec2, rect_size: Vec2, surface: Vec2) -> Vec2 {
    let scale = surface / rect_size.max(Vec2::splat(f32::EPSILON));
    (client - rect_origin) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_to_canvas_identity() {
        let p = client_to_canvas(
            Vec2::new(110.0, 220.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(800.0, 800.0),
            Vec2::new(800.0, 800.0),
        );
        assert_eq!(p, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_client_to_canvas_scaled_down_element() {
        // Canvas displayed at half size: a click in the middle still maps to the center
        let p = client_to_canvas(
            Vec2::new(200.0, 200.0),
            Vec2::ZERO,
            Vec2::new(400.0, 400.0),
            Vec2::new(800.0, 800.0),
        );
        assert_eq!(p, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_client_to_canvas_zero_sized_rect_is_finite() {
        let p = client_to_canvas(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::ZERO, Vec2::splat(800.0));
        assert!(p.is_finite());
    }
}
