//! Rendering contract
//!
//! Each frame the platform captures a read-only [`FrameView`] of the session,
//! turns it into [`shapes::Shape`]s and hands those to a backend. Only the
//! Canvas 2D backend exists, and only on wasm32.

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Controls, GamePhase, GameSession, PartId, PartKind, ScoreCard};

/// How parts are depicted this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderMode {
    /// Generic "?" marker while parts are being placed
    Placeholder,
    /// Full feature drawing (tray and result)
    Revealed,
}

impl RenderMode {
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Playing => RenderMode::Placeholder,
            GamePhase::Ready | GamePhase::Finished => RenderMode::Revealed,
        }
    }
}

/// A part (or target marker) as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartView {
    pub id: PartId,
    pub kind: PartKind,
    pub pos: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub mode: RenderMode,
    /// Parts in z-order, bottom first
    pub parts: Vec<PartView>,
    /// Correct-position markers (Finished only)
    pub targets: Vec<PartView>,
    /// Ready overlay with the start prompt
    pub overlay: bool,
    pub controls: Controls,
    pub score: Option<ScoreCard>,
}

impl FrameView {
    pub fn capture(session: &GameSession) -> Self {
        let phase = session.phase();
        let parts = session
            .parts()
            .all()
            .iter()
            .map(|p| PartView {
                id: p.id(),
                kind: p.kind(),
                pos: p.pos,
            })
            .collect();
        let targets = if phase == GamePhase::Finished {
            PartId::ALL
                .iter()
                .map(|&id| PartView {
                    id,
                    kind: id.kind(),
                    pos: id.target(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            phase,
            mode: RenderMode::for_phase(phase),
            parts,
            targets,
            overlay: phase == GamePhase::Ready,
            controls: session.controls(),
            score: session.score_card().cloned(),
        }
    }

    /// Frame of the solved face: every part on its target, fully drawn
    pub fn solved() -> Self {
        let parts: Vec<PartView> = PartId::ALL
            .iter()
            .map(|&id| PartView {
                id,
                kind: id.kind(),
                pos: id.target(),
            })
            .collect();
        Self {
            phase: GamePhase::Finished,
            mode: RenderMode::Revealed,
            parts,
            targets: Vec::new(),
            overlay: false,
            controls: Controls::for_phase(GamePhase::Finished),
            score: None,
        }
    }
}
