//! Shot resolution
//!
//! Turns a batter's directional choice into a polar trajectory, then into an
//! outcome. Sampling and resolution are split so the trajectory can be
//! animated between the two without touching the RNG:
//!
//! 1. `sample_trajectory` draws (distance, angle) once
//! 2. the animator replays it
//! 3. `resolve_outcome` checks catches, then zones, in strict priority order

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::{CatchRange, Formation};
use super::ground::GroundSpec;
use crate::consts::{BOUNDARY_CHANCE, SHORT_RUN_WICKET_CHANCE};

/// Direction the batter chooses to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShotDirection {
    /// Leg side, arc straddling 0°
    Left,
    /// Off side
    Right,
    /// Back foot, behind the stumps
    Back,
    /// Front foot, down the ground
    #[default]
    Straight,
}

impl ShotDirection {
    pub const ALL: [ShotDirection; 4] = [
        ShotDirection::Left,
        ShotDirection::Right,
        ShotDirection::Back,
        ShotDirection::Straight,
    ];

    /// Single-letter input code
    pub fn code(&self) -> char {
        match self {
            ShotDirection::Left => 'l',
            ShotDirection::Right => 'r',
            ShotDirection::Back => 'b',
            ShotDirection::Straight => 's',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotDirection::Left => "Left-side (Leg)",
            ShotDirection::Right => "Right-side (Off)",
            ShotDirection::Back => "Back Side (Backfoot)",
            ShotDirection::Straight => "Straight (Frontfoot)",
        }
    }

    /// Parse raw player input. Missing input is rejected like any other
    /// invalid string.
    pub fn from_input(input: Option<&str>) -> Result<Self, ShotParseError> {
        match input {
            Some(raw) => raw.parse(),
            None => Err(ShotParseError::Missing),
        }
    }

    /// Uniformly random shot (autoplay)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl FromStr for ShotDirection {
    type Err = ShotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l" => Ok(ShotDirection::Left),
            "r" => Ok(ShotDirection::Right),
            "b" => Ok(ShotDirection::Back),
            "s" => Ok(ShotDirection::Straight),
            "" => Err(ShotParseError::Missing),
            other => Err(ShotParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ShotDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShotParseError {
    #[error("no shot chosen")]
    Missing,
    #[error("unknown shot '{0}' (expected one of l, r, b, s)")]
    Unknown(String),
}

/// Where the ball ends up, relative to the pitch center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarCoordinate {
    /// Cells from center (non-negative)
    pub distance: f32,
    /// Degrees in [0, 360)
    pub angle: f32,
}

impl PolarCoordinate {
    pub const fn new(distance: f32, angle: f32) -> Self {
        Self { distance, angle }
    }
}

/// Result of a single delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Runs(u8),
    Wicket,
}

impl Outcome {
    pub const DOT: Outcome = Outcome::Runs(0);
    pub const SINGLE: Outcome = Outcome::Runs(1);
    pub const DOUBLE: Outcome = Outcome::Runs(2);
    pub const TRIPLE: Outcome = Outcome::Runs(3);
    pub const BOUNDARY: Outcome = Outcome::Runs(4);
    pub const MAXIMUM: Outcome = Outcome::Runs(6);

    /// Runs scored (0 for a wicket)
    pub fn runs(&self) -> u32 {
        match self {
            Outcome::Runs(n) => *n as u32,
            Outcome::Wicket => 0,
        }
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self, Outcome::Wicket)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Wicket => f.write_str("W"),
            Outcome::Runs(n) => write!(f, "{n}"),
        }
    }
}

/// Distance-based ring of the ground, nearest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Mis-hit that barely leaves the pitch
    ShortRun,
    InnerCircle,
    DeepInside,
    NearBoundary,
    /// Cleared the rope
    Maximum,
}

impl Zone {
    /// Classify a landing distance. Boundaries are strict, so a distance
    /// equal to a radius falls into the farther zone.
    pub fn classify(distance: f32, spec: &GroundSpec) -> Self {
        if distance < spec.inner_radius / 2.0 {
            Zone::ShortRun
        } else if distance < spec.inner_radius {
            Zone::InnerCircle
        } else if distance < spec.outer_radius - 2.0 {
            Zone::DeepInside
        } else if distance < spec.outer_radius {
            Zone::NearBoundary
        } else {
            Zone::Maximum
        }
    }

    /// Sample the outcome for a ball that was not caught
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        match self {
            Zone::ShortRun => {
                if rng.random_bool(SHORT_RUN_WICKET_CHANCE) {
                    Outcome::Wicket
                } else {
                    Outcome::DOT
                }
            }
            Zone::InnerCircle => pick(INNER_CIRCLE_POOL, rng),
            Zone::DeepInside => pick(DEEP_INSIDE_POOL, rng),
            Zone::NearBoundary => {
                if rng.random_bool(BOUNDARY_CHANCE) {
                    Outcome::BOUNDARY
                } else {
                    Outcome::DOUBLE
                }
            }
            Zone::Maximum => Outcome::MAXIMUM,
        }
    }
}

/// Singles most likely, doubles next
const INNER_CIRCLE_POOL: &[Outcome] = &[
    Outcome::SINGLE,
    Outcome::SINGLE,
    Outcome::SINGLE,
    Outcome::DOUBLE,
    Outcome::DOUBLE,
];

const DEEP_INSIDE_POOL: &[Outcome] = &[
    Outcome::SINGLE,
    Outcome::DOUBLE,
    Outcome::DOUBLE,
    Outcome::TRIPLE,
];

fn pick<R: Rng + ?Sized>(pool: &[Outcome], rng: &mut R) -> Outcome {
    pool[rng.random_range(0..pool.len())]
}

/// How far a shot travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistancePolicy {
    /// Per-shot ranges: straight drives carry to the rope, back-foot
    /// shots die near the pitch
    #[default]
    ShotShaped,
    /// Anywhere from the crease to the maximum radius
    Uniform,
}

impl DistancePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shot_shaped" | "shaped" => Some(DistancePolicy::ShotShaped),
            "uniform" => Some(DistancePolicy::Uniform),
            _ => None,
        }
    }

    /// Inclusive integer distance range for a shot
    pub fn range(&self, shot: ShotDirection, max_radius: f32) -> (i32, i32) {
        let max = max_radius.floor() as i32;
        let (lo, hi) = match self {
            DistancePolicy::Uniform => (0, max),
            DistancePolicy::ShotShaped => match shot {
                ShotDirection::Straight => (max - 5, max),
                ShotDirection::Left => (5, max - 3),
                ShotDirection::Right => (3, max - 6),
                ShotDirection::Back => (0, 6),
            },
        };
        // Small grounds can invert a shaped range; clamp into [0, max]
        let lo = lo.clamp(0, max.max(0));
        let hi = hi.clamp(lo, max.max(lo));
        (lo, hi)
    }
}

/// Sample the launch angle (whole degrees) for a shot
pub fn sample_angle<R: Rng + ?Sized>(shot: ShotDirection, rng: &mut R) -> f32 {
    let degrees = match shot {
        ShotDirection::Left => {
            if rng.random_bool(0.5) {
                rng.random_range(315..360)
            } else {
                rng.random_range(0..=45)
            }
        }
        ShotDirection::Right => rng.random_range(135..=225),
        ShotDirection::Back => rng.random_range(225..=315),
        ShotDirection::Straight => rng.random_range(45..=135),
    };
    degrees as f32
}

/// Sample the carry distance (whole cells) for a shot
pub fn sample_distance<R: Rng + ?Sized>(
    shot: ShotDirection,
    policy: DistancePolicy,
    max_radius: f32,
    rng: &mut R,
) -> f32 {
    let (lo, hi) = policy.range(shot, max_radius);
    rng.random_range(lo..=hi) as f32
}

/// Draw the full trajectory once; everything after this is replay
pub fn sample_trajectory<R: Rng + ?Sized>(
    shot: ShotDirection,
    policy: DistancePolicy,
    spec: &GroundSpec,
    rng: &mut R,
) -> PolarCoordinate {
    let distance = sample_distance(shot, policy, spec.max_shot_radius(), rng);
    let angle = sample_angle(shot, rng);
    PolarCoordinate::new(distance, angle)
}

/// How a trajectory was resolved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    /// Landing zone, None when the ball was caught
    pub zone: Option<Zone>,
    /// Index of the fielder who took the catch
    pub caught_by: Option<usize>,
}

/// Resolve a trajectory. A catch always wins over zone scoring.
pub fn resolve_outcome<R: Rng + ?Sized>(
    ball: PolarCoordinate,
    formation: &Formation,
    catch: &CatchRange,
    spec: &GroundSpec,
    rng: &mut R,
) -> Resolution {
    if let Some(fielder) = formation.catcher(ball, catch) {
        return Resolution {
            outcome: Outcome::Wicket,
            zone: None,
            caught_by: Some(fielder),
        };
    }

    let zone = Zone::classify(ball.distance, spec);
    Resolution {
        outcome: zone.roll(rng),
        zone: Some(zone),
        caught_by: None,
    }
}
