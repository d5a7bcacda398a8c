//! Game session: phases, transitions and pointer handling
//!
//! A single owned `GameSession` holds every piece of mutable game data.
//! Commands and pointer events are applied to it one at a time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::drag::{Cursor, DragSession, PointerEvent};
use super::hit::find_topmost;
use super::part::PartRegistry;
use super::scoring::ScoreCard;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Parts sit in the tray, waiting for Start
    #[default]
    Ready,
    /// Parts are scattered and hidden; the player drags them into place
    Playing,
    /// Round scored, positions frozen until Reset
    Finished,
}

/// Control-surface command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Finish,
    Reset,
}

/// Which commands the control surface should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub finish: bool,
    pub reset: bool,
}

impl Controls {
    pub fn for_phase(phase: GamePhase) -> Self {
        Self {
            start: phase == GamePhase::Ready,
            finish: phase == GamePhase::Playing,
            reset: phase != GamePhase::Ready,
        }
    }

    pub fn allows(&self, command: Command) -> bool {
        match command {
            Command::Start => self.start,
            Command::Finish => self.finish,
            Command::Reset => self.reset,
        }
    }
}

/// All mutable game data
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the spawn RNG was created with
    pub seed: u64,
    phase: GamePhase,
    parts: PartRegistry,
    drag: Option<DragSession>,
    score: Option<ScoreCard>,
    rng: Pcg32,
    /// Inset of the spawn area from the surface edges
    spawn_margin: f32,
}

impl GameSession {
    /// Fresh session with the default spawn margin
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Ready,
            parts: PartRegistry::new(),
            drag: None,
            score: None,
            rng: Pcg32::seed_from_u64(seed),
            spawn_margin: SPAWN_MARGIN,
        }
    }

    /// Fresh session using the spawn margin from settings
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let mut session = Self::new(seed);
        session.spawn_margin = settings.spawn_margin.max(0.0);
        session
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn parts(&self) -> &PartRegistry {
        &self.parts
    }

    #[inline]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Result of the last Finish, cleared on Start and Reset
    #[inline]
    pub fn score_card(&self) -> Option<&ScoreCard> {
        self.score.as_ref()
    }

    pub fn controls(&self) -> Controls {
        Controls::for_phase(self.phase)
    }

    /// Apply a control-surface command. Returns false if it was not valid in this phase.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Finish => self.finish(),
            Command::Reset => self.reset(),
        }
    }

    /// Ready -> Playing: scatter the parts across the surface
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            log::trace!("start ignored in {:?}", self.phase);
            return false;
        }

        let margin = self.spawn_margin;
        let rng = &mut self.rng;
        self.parts.reposition(|_| {
            Vec2::new(
                spawn_coord(rng, SURFACE_WIDTH, margin),
                spawn_coord(rng, SURFACE_HEIGHT, margin),
            )
        });
        self.drag = None;
        self.score = None;
        self.phase = GamePhase::Playing;
        log::info!("Round started");
        true
    }

    /// Playing -> Finished: score the current positions and freeze them
    pub fn finish(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            log::trace!("finish ignored in {:?}", self.phase);
            return false;
        }

        let card = ScoreCard::compute(&self.parts);
        log::info!("Round finished: {} ({:?})", card.total, card.tier);
        self.score = Some(card);
        self.drag = None;
        self.phase = GamePhase::Finished;
        true
    }

    /// Playing/Finished -> Ready: parts back to the tray
    pub fn reset(&mut self) -> bool {
        if self.phase == GamePhase::Ready {
            log::trace!("reset ignored in Ready");
            return false;
        }

        self.parts.layout_tray();
        self.drag = None;
        self.score = None;
        self.phase = GamePhase::Ready;
        log::info!("Round reset");
        true
    }

    /// Feed one pointer event.
    ///
    /// Returns the cursor to show, or `None` to leave it unchanged.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<Cursor> {
        if event.is_release() {
            if let Some(drag) = self.drag.take() {
                log::debug!("Released {}", drag.part.as_str());
            }
            return Some(Cursor::Default);
        }

        if self.phase != GamePhase::Playing {
            return None;
        }

        match event {
            PointerEvent::Down(point) => {
                let part = find_topmost(&self.parts, point, self.phase)?;
                log::debug!("Grabbed {} at {:?}", part.id().as_str(), point);
                self.drag = Some(DragSession::grab(part, point));
                Some(Cursor::Grabbing)
            }
            PointerEvent::Move(point) => match self.drag {
                Some(drag) => {
                    let pos = drag.follow(point);
                    log::trace!("Dragging {} to {:?}", drag.part.as_str(), pos);
                    self.parts.by_id_mut(drag.part).pos = pos;
                    None
                }
                None => Some(match find_topmost(&self.parts, point, self.phase) {
                    Some(_) => Cursor::Grab,
                    None => Cursor::Default,
                }),
            },
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::Cancel => None,
        }
    }
}

/// Uniform coordinate in `[margin, extent - margin)`, or the midpoint if the margin leaves no room
fn spawn_coord(rng: &mut Pcg32, extent: f32, margin: f32) -> f32 {
    let (lo, hi) = (margin, extent - margin);
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        extent / 2.0
    }
}
