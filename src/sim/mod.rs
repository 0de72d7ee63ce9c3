//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Trajectory sampled once per delivery, then replayed
//! - No rendering or terminal dependencies

pub mod delivery;
pub mod field;
pub mod ground;
pub mod shot;
pub mod state;

pub use delivery::{Animator, DeliveryError, DeliveryReport, Match, MatchConfig, NoAnimation};
pub use field::{CatchRange, Fielder, Formation, is_caught};
pub use ground::{Cell, Ground, GroundSpec};
pub use shot::{
    DistancePolicy, Outcome, PolarCoordinate, Resolution, ShotDirection, ShotParseError, Zone,
    resolve_outcome, sample_angle, sample_distance, sample_trajectory,
};
pub use state::{MatchResult, MatchState, MatchStatus, Mode, match_status};
