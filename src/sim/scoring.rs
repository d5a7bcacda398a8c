//! Proximity scoring
//!
//! Each part scores `100 * (1 - d / MAX_DISTANCE)` rounded and floored at 0,
//! where `d` is the distance to its target. The total is the rounded mean.

use serde::{Deserialize, Serialize};

use super::part::{PART_COUNT, Part, PartId, PartRegistry};
use crate::consts::MAX_DISTANCE;
use crate::settings::Locale;

/// Score for a single part, in [0, 100]
///
/// Evaluated in f64: d = 99.5 scores 1, d = 0.5 scores 100.
pub fn score_part(part: &Part) -> u32 {
    let raw = (1.0 - part.target_distance() / f64::from(MAX_DISTANCE)) * 100.0;
    raw.round().max(0.0) as u32
}

/// Rounded mean of all part scores, in [0, 100]
pub fn total_score(registry: &PartRegistry) -> u32 {
    let sum: u32 = registry.all().iter().map(score_part).sum();
    (f64::from(sum) / PART_COUNT as f64).round().max(0.0) as u32
}

/// Qualitative band for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreTier {
    TryAgain,
    AlmostThere,
    NotBad,
    Good,
    Great,
    Perfect,
}

impl ScoreTier {
    /// Thresholds checked top-down, first match wins
    const THRESHOLDS: [(u32, ScoreTier); 5] = [
        (90, ScoreTier::Perfect),
        (80, ScoreTier::Great),
        (70, ScoreTier::Good),
        (60, ScoreTier::NotBad),
        (50, ScoreTier::AlmostThere),
    ];

    pub fn for_score(score: u32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(ScoreTier::TryAgain)
    }

    pub fn message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => match self {
                ScoreTier::Perfect => "完璧！天才！",
                ScoreTier::Great => "すごい！上手！",
                ScoreTier::Good => "いい感じ！",
                ScoreTier::NotBad => "まあまあ！",
                ScoreTier::AlmostThere => "もう少し！",
                ScoreTier::TryAgain => "もう一回やってみよう！",
            },
            Locale::En => match self {
                ScoreTier::Perfect => "Perfect! Genius!",
                ScoreTier::Great => "Amazing! Well done!",
                ScoreTier::Good => "Looking good!",
                ScoreTier::NotBad => "Not bad!",
                ScoreTier::AlmostThere => "Almost there!",
                ScoreTier::TryAgain => "Give it another try!",
            },
        }
    }
}

/// Message for a total score
pub fn message(score: u32, locale: Locale) -> &'static str {
    ScoreTier::for_score(score).message(locale)
}

/// Result of a finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Per-part scores in declaration order
    pub parts: [(PartId, u32); PART_COUNT],
    pub total: u32,
    pub tier: ScoreTier,
}

impl ScoreCard {
    /// Score the registry as it stands
    pub fn compute(registry: &PartRegistry) -> Self {
        let total = total_score(registry);
        Self {
            parts: PartId::ALL.map(|id| (id, score_part(registry.by_id(id)))),
            total,
            tier: ScoreTier::for_score(total),
        }
    }

    pub fn part_score(&self, id: PartId) -> u32 {
        self.parts[id.index()].1
    }

    pub fn message(&self, locale: Locale) -> &'static str {
        self.tier.message(locale)
    }

    /// Score label as shown next to the controls
    pub fn label(&self, locale: Locale) -> String {
        match locale {
            Locale::Ja => format!("{}点", self.total),
            Locale::En => format!("{} pts", self.total),
        }
    }
}
