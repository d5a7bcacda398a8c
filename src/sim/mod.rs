//! Game logic module
//!
//! Everything that decides gameplay lives here:
//! - Seeded RNG only
//! - Stable part order (declaration order is z-order)
//! - No rendering or platform dependencies

pub mod drag;
pub mod hit;
pub mod part;
pub mod scoring;
pub mod state;

pub use drag::{Cursor, DragSession, PointerEvent};
pub use hit::{find_topmost, hit_radius, part_contains};
pub use part::{PART_COUNT, Part, PartId, PartKind, PartRegistry};
pub use scoring::{ScoreCard, ScoreTier, message, score_part, total_score};
pub use state::{Command, Controls, GamePhase, GameSession};
