//! Crease - a turn-based terminal cricket batting simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ground, fielders, shot resolution, match state)
//! - `renderer`: Terminal presentation and ball animation
//! - `settings`: JSON-backed configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    /// Default ground grid dimensions (cells)
    pub const GROUND_WIDTH: u32 = 25;
    pub const GROUND_HEIGHT: u32 = 25;

    /// Default zone radii (cells from center)
    pub const INNER_RADIUS: f32 = 6.0;
    pub const OUTER_RADIUS: f32 = 11.0;

    /// Proportional ground variant: radii as a fraction of grid width
    pub const INNER_RADIUS_RATIO: f32 = 0.25;
    pub const OUTER_RADIUS_RATIO: f32 = 0.45;

    /// A cell within this distance of a ring radius is drawn as the ring
    pub const RING_TOLERANCE: f32 = 0.5;

    /// Pitch strip extends this many cells above and below center
    pub const PITCH_HALF_LENGTH: i32 = 2;

    /// Shots can carry this far past the ground radius
    pub const SHOT_OVERRUN: f32 = 5.0;

    /// Catch tolerances
    pub const CATCH_DISTANCE: f32 = 2.0;
    pub const CATCH_ANGLE: f32 = 15.0; // degrees

    /// Probability that a mis-hit in the short-run zone is a wicket
    pub const SHORT_RUN_WICKET_CHANCE: f64 = 0.20;
    /// Probability that a near-boundary ball reaches the rope
    pub const BOUNDARY_CHANCE: f64 = 0.70;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Shortest angular separation between two angles, in degrees [0, 180]
#[inline]
pub fn angle_delta(a: f32, b: f32) -> f32 {
    let d = (normalize_degrees(a) - normalize_degrees(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}

/// Euclidean distance between two grid points
#[inline]
pub fn distance_between(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Integer-floored center of a `width x height` grid
#[inline]
pub fn center_coords(width: u32, height: u32) -> IVec2 {
    IVec2::new((width / 2) as i32, (height / 2) as i32)
}

/// Convert polar (distance, degrees) around `origin` to the nearest grid cell
///
/// The angle is measured counter-clockwise from the positive x-axis in
/// mathematical orientation. On screen the y-axis grows downward.
#[inline]
pub fn polar_to_cartesian(origin: IVec2, distance: f32, angle_degrees: f32) -> IVec2 {
    let theta = angle_degrees.to_radians();
    let x = origin.x as f32 + distance * theta.cos();
    let y = origin.y as f32 + distance * theta.sin();
    IVec2::new(x.round() as i32, y.round() as i32)
}
