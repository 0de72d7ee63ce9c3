//! One delivery at a time
//!
//! `Match` owns the config, the RNG and the score. Callers drive it with one
//! `deliver` call per turn, so it runs headless in tests and behind a
//! terminal prompt in the binary alike.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::{CatchRange, Formation};
use super::ground::{Ground, GroundSpec};
use super::shot::{
    DistancePolicy, Outcome, PolarCoordinate, ShotDirection, ShotParseError, Zone,
    resolve_outcome, sample_trajectory,
};
use super::state::{MatchResult, MatchState, MatchStatus, Mode};
use crate::polar_to_cartesian;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("invalid shot: {0}")]
    InvalidShot(#[from] ShotParseError),
    #[error("the match is already over")]
    MatchOver,
}

/// Everything fixed for the length of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub mode: Mode,
    pub target: u32,
    pub max_wickets: u32,
    pub ground: GroundSpec,
    pub formation: Formation,
    pub catch: CatchRange,
    pub distance_policy: DistancePolicy,
}

impl MatchConfig {
    /// Standard ground and field for a mode; the target is drawn from `seed`
    pub fn for_mode(mode: Mode, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed ^ TARGET_STREAM);
        Self::with_target(mode, mode.sample_target(&mut rng))
    }

    /// Standard ground and field with an explicit target
    pub fn with_target(mode: Mode, target: u32) -> Self {
        Self {
            mode,
            target,
            max_wickets: mode.max_wickets(),
            ground: GroundSpec::default(),
            formation: Formation::standard(),
            catch: CatchRange::default(),
            distance_policy: DistancePolicy::default(),
        }
    }
}

/// Target draws use their own stream so they don't shift delivery rolls
const TARGET_STREAM: u64 = 0x7A26_E7C0_FFEE_0001;

/// What happened on a delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReport {
    /// 1-based delivery number
    pub number: u32,
    pub shot: ShotDirection,
    pub trajectory: PolarCoordinate,
    /// Landing zone, None when caught
    pub zone: Option<Zone>,
    /// Index into the formation of the catching fielder
    pub caught_by: Option<usize>,
    pub outcome: Outcome,
    pub status: MatchStatus,
}

/// Presentation hook for a delivery in flight
///
/// Frames are built from geometry that is already final; an animator can
/// only watch, never steer, the delivery.
pub trait Animator {
    /// Ball has travelled `step` cells and sits at `ball` on `ground`
    fn frame(&mut self, _ground: &Ground, _step: u32, _ball: IVec2) {}

    /// Outcome has been applied to the score
    fn resolved(&mut self, _report: &DeliveryReport, _state: &MatchState) {}
}

/// Animator that shows nothing (headless play and tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAnimation;

impl Animator for NoAnimation {}

/// A single chase in progress
#[derive(Debug, Clone)]
pub struct Match {
    config: MatchConfig,
    state: MatchState,
    seed: u64,
    rng: Pcg32,
}

impl Match {
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        let state = MatchState::with_wickets(config.mode, config.target, config.max_wickets);
        log::info!(
            "Match start: mode={}, target={}, wickets={}, seed={}",
            config.mode.as_str(),
            config.target,
            config.max_wickets,
            seed
        );
        Self {
            config,
            state,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> MatchStatus {
        self.state.status()
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.state.result()
    }

    /// Fresh ground for display between deliveries
    pub fn ground(&self) -> Ground {
        Ground::build(self.config.ground, &self.config.formation)
    }

    /// Play one delivery from raw player input
    ///
    /// Invalid input leaves the match untouched so the caller can re-prompt.
    pub fn deliver(
        &mut self,
        input: Option<&str>,
        animator: &mut dyn Animator,
    ) -> Result<DeliveryReport, DeliveryError> {
        if self.status().is_over() {
            return Err(DeliveryError::MatchOver);
        }
        let shot = ShotDirection::from_input(input)?;
        self.play(shot, animator)
    }

    /// Play one delivery with an already-chosen shot
    pub fn play(
        &mut self,
        shot: ShotDirection,
        animator: &mut dyn Animator,
    ) -> Result<DeliveryReport, DeliveryError> {
        if self.status().is_over() {
            return Err(DeliveryError::MatchOver);
        }

        // Commit the trajectory before anything is drawn
        let trajectory = sample_trajectory(
            shot,
            self.config.distance_policy,
            &self.config.ground,
            &mut self.rng,
        );

        self.animate(trajectory, animator);

        let resolution = resolve_outcome(
            trajectory,
            &self.config.formation,
            &self.config.catch,
            &self.config.ground,
            &mut self.rng,
        );
        let status = self.state.apply(resolution.outcome)?;

        let report = DeliveryReport {
            number: self.state.deliveries(),
            shot,
            trajectory,
            zone: resolution.zone,
            caught_by: resolution.caught_by,
            outcome: resolution.outcome,
            status,
        };

        log::debug!(
            "Delivery {}: {:?} d={} a={} zone={:?} caught_by={:?} -> {} ({}/{})",
            report.number,
            shot,
            trajectory.distance,
            trajectory.angle,
            report.zone,
            report.caught_by,
            report.outcome,
            self.state.score(),
            self.state.wickets_lost()
        );
        if status.is_over() {
            log::info!(
                "Match over after {} deliveries: {:?}",
                report.number,
                status
            );
        }

        animator.resolved(&report, &self.state);
        Ok(report)
    }

    /// Step the ball outward one cell at a time along its committed angle
    fn animate(&self, trajectory: PolarCoordinate, animator: &mut dyn Animator) {
        let steps = trajectory.distance.floor() as u32;
        for step in 1..=steps {
            let mut ground = self.ground();
            let ball = polar_to_cartesian(ground.center(), step as f32, trajectory.angle);
            ground.mark_ball(ball);
            animator.frame(&ground, step, ball);
        }
    }
}
