//! Game settings and preferences
//!
//! Loaded from an optional JSON file. Missing fields take their defaults and
//! command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::renderer::GlyphSet;
use crate::sim::{CatchRange, DistancePolicy, GroundSpec, MatchConfig, Mode};

/// Accepted grid widths for a proportional ground
pub const MIN_GROUND_WIDTH: u32 = 5;
pub const MAX_GROUND_WIDTH: u32 = 199;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty
    pub mode: Mode,
    /// Fixed RNG seed (random when unset)
    pub seed: Option<u64>,

    // === Simulation ===
    /// How far shots carry
    pub distance_policy: DistancePolicy,
    /// Scale zone radii with `ground_width` instead of the fixed 6/11
    pub proportional_ground: bool,
    /// Grid width (cells); only used with `proportional_ground`
    pub ground_width: u32,
    /// Fielders near 0° also cover angles just below 360°
    pub catch_wraparound: bool,

    // === Presentation ===
    /// Animate the ball in flight
    pub animation: bool,
    /// Milliseconds between animation frames
    pub frame_delay_ms: u64,
    /// Emoji or plain ASCII ground
    pub glyphs: GlyphSet,
    /// Milliseconds to hold the feedback line between autoplay deliveries
    pub autoplay_pause_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Easy,
            seed: None,

            distance_policy: DistancePolicy::ShotShaped,
            proportional_ground: false,
            ground_width: crate::consts::GROUND_WIDTH,
            catch_wraparound: true,

            animation: true,
            frame_delay_ms: 120,
            glyphs: GlyphSet::Emoji,
            autoplay_pause_ms: 1500,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn ground_spec(&self) -> GroundSpec {
        if self.proportional_ground {
            let width = self.ground_width.clamp(MIN_GROUND_WIDTH, MAX_GROUND_WIDTH);
            if width != self.ground_width {
                log::warn!(
                    "ground_width {} out of range {}..={}; using {}",
                    self.ground_width,
                    MIN_GROUND_WIDTH,
                    MAX_GROUND_WIDTH,
                    width
                );
            }
            GroundSpec::proportional(width)
        } else {
            GroundSpec::default()
        }
    }

    /// Animation frame delay (None when animation is off)
    pub fn frame_delay(&self) -> Option<Duration> {
        self.animation
            .then(|| Duration::from_millis(self.frame_delay_ms))
    }

    /// Pause after each autoplay delivery so its feedback stays readable
    pub fn autoplay_pause(&self) -> Duration {
        Duration::from_millis(self.autoplay_pause_ms)
    }

    /// Match config for a seed: standard field, these settings' ground and rules
    pub fn match_config(&self, seed: u64) -> MatchConfig {
        let mut config = MatchConfig::for_mode(self.mode, seed);
        config.ground = self.ground_spec();
        config.distance_policy = self.distance_policy;
        config.catch = CatchRange {
            wraparound: self.catch_wraparound,
            ..CatchRange::default()
        };
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "mode": "hard", "glyphs": "ascii" }"#).unwrap();
        assert_eq!(settings.mode, Mode::Hard);
        assert_eq!(settings.glyphs, GlyphSet::Ascii);
        assert_eq!(settings.distance_policy, DistancePolicy::ShotShaped);
        assert!(settings.animation);
    }

    #[test]
    fn test_distance_policy_snake_case() {
        let settings: Settings =
            serde_json::from_str(r#"{ "distance_policy": "uniform", "seed": 7 }"#).unwrap();
        assert_eq!(settings.distance_policy, DistancePolicy::Uniform);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/crease.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Read { .. })));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }

    #[test]
    fn test_match_config_applies_settings() {
        let settings = Settings {
            mode: Mode::Medium,
            proportional_ground: true,
            ground_width: 40,
            catch_wraparound: false,
            distance_policy: DistancePolicy::Uniform,
            ..Settings::default()
        };
        let config = settings.match_config(11);
        assert_eq!(config.max_wickets, 5);
        assert_eq!(config.ground.width, 40);
        assert!(!config.catch.wraparound);
        assert_eq!(config.distance_policy, DistancePolicy::Uniform);
    }

    #[test]
    fn test_oversized_ground_width_is_clamped() {
        let settings = Settings {
            proportional_ground: true,
            ground_width: 70_000,
            ..Settings::default()
        };
        let config = settings.match_config(1);
        assert_eq!(config.ground.width, MAX_GROUND_WIDTH);
        assert_eq!(config.ground.height, MAX_GROUND_WIDTH);

        let mut game = crate::sim::Match::new(config, 1);
        let report = game
            .play(crate::sim::ShotDirection::Straight, &mut crate::sim::NoAnimation)
            .unwrap();
        assert_eq!(report.number, 1);
        assert_eq!(game.ground().rows().count(), MAX_GROUND_WIDTH as usize);

        let tiny = Settings {
            ground_width: 0,
            ..settings
        };
        assert_eq!(tiny.ground_spec().width, MIN_GROUND_WIDTH);
    }

    #[test]
    fn test_frame_delay() {
        let mut settings = Settings::default();
        assert_eq!(settings.frame_delay(), Some(Duration::from_millis(120)));
        settings.animation = false;
        assert_eq!(settings.frame_delay(), None);
    }

    #[test]
    fn test_autoplay_pause() {
        assert_eq!(
            Settings::default().autoplay_pause(),
            Duration::from_millis(1500)
        );
        let settings: Settings = serde_json::from_str(r#"{ "autoplay_pause_ms": 0 }"#).unwrap();
        assert_eq!(settings.autoplay_pause(), Duration::ZERO);
    }
}
