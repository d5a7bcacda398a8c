//! Runtime settings
//!
//! Read once at startup, from the page query string on web or from the
//! `PLANET_FACE_SETTINGS` environment variable (JSON) on native.

use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_MARGIN;

/// Language for score messages and prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Some(Locale::Ja),
            "en" | "english" => Some(Locale::En),
            _ => None,
        }
    }

    /// Prompt shown over the surface while Ready
    pub fn start_prompt(&self) -> &'static str {
        match self {
            Locale::Ja => "スタートボタンを押してね！",
            Locale::En => "Press Start!",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Message language
    pub locale: Locale,
    /// Fixed RNG seed (None = pick one at startup)
    pub seed: Option<u64>,
    /// Show the half-scale solved face next to the board
    pub show_answer_card: bool,
    /// Inset for random spawn positions (never negative)
    pub spawn_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::Ja,
            seed: None,
            show_answer_card: true,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

impl Settings {
    /// Environment variable read by the native `load`
    pub const ENV_VAR: &'static str = "PLANET_FACE_SETTINGS";

    /// Parse settings JSON; missing fields keep their defaults, bad input falls back entirely
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring invalid settings: {}", e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values
    pub fn sanitized(mut self) -> Self {
        // `!(x >= 0)` also catches NaN
        if !(self.spawn_margin >= 0.0) {
            log::warn!("spawn_margin {} clamped to 0", self.spawn_margin);
            self.spawn_margin = 0.0;
        }
        self
    }

    /// Overlay `lang`, `seed` and `answer` from a URL query string (`?lang=en&seed=4`)
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "lang" => match Locale::from_str(value) {
                    Some(locale) => self.locale = locale,
                    None => log::warn!("Unknown lang: {}", value),
                },
                "seed" => match value.parse() {
                    Ok(seed) => self.seed = Some(seed),
                    Err(_) => log::warn!("Invalid seed: {}", value),
                },
                "answer" => self.show_answer_card = !matches!(value, "0" | "false" | "off"),
                _ => {}
            }
        }
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut settings = Self::default();
        let query = web_sys::window().and_then(|w| w.location().search().ok());
        if let Some(query) = query {
            settings.apply_query(&query);
        }
        log::info!("Settings: {:?}", settings);
        settings
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let settings = match std::env::var(Self::ENV_VAR) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        };
        log::info!("Settings: {:?}", settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.locale, Locale::Ja);
        assert_eq!(settings.spawn_margin, 50.0);
        assert!(settings.show_answer_card);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"locale":"En","seed":12}"#);
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.seed, Some(12));
        assert_eq!(settings.spawn_margin, SPAWN_MARGIN);
    }

    #[test]
    fn test_negative_spawn_margin_is_clamped() {
        let settings = Settings::from_json(r#"{"spawn_margin":-25.0}"#);
        assert_eq!(settings.spawn_margin, 0.0);

        let settings = Settings::from_json(r#"{"spawn_margin":12.5}"#);
        assert_eq!(settings.spawn_margin, 12.5);
    }

    #[test]
    fn test_nan_spawn_margin_is_clamped() {
        let settings = Settings {
            spawn_margin: f32::NAN,
            ..Settings::default()
        };
        assert_eq!(settings.sanitized().spawn_margin, 0.0);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }

    #[test]
    fn test_apply_query() {
        let mut settings = Settings::default();
        settings.apply_query("?lang=EN&seed=77&answer=off&unused=1");
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.seed, Some(77));
        assert!(!settings.show_answer_card);
    }

    #[test]
    fn test_apply_query_ignores_bad_values() {
        let mut settings = Settings::default();
        settings.apply_query("lang=fr&seed=abc&&");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!(Locale::from_str("ja"), Some(Locale::Ja));
        assert_eq!(Locale::from_str("English"), Some(Locale::En));
        assert_eq!(Locale::from_str("de"), None);
        assert_eq!(Locale::En.as_str(), "en");
    }
}
