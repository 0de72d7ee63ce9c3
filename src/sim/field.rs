//! Fielders and catch detection
//!
//! A fielder lives in polar space around the pitch center:
//! - distance: cells from center (sign encodes which side of the pitch)
//! - angle: degrees, counter-clockwise from the positive x-axis
//!
//! A ball is caught when its landing (distance, angle) falls within the
//! catch range of any fielder. Catches are checked before zone scoring.

use serde::{Deserialize, Serialize};

use super::shot::PolarCoordinate;
use crate::angle_delta;
use crate::consts::{CATCH_ANGLE, CATCH_DISTANCE};

/// A single fielder position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fielder {
    /// Signed distance from center (negative = opposite side)
    pub distance: f32,
    /// Angle in degrees
    pub angle: f32,
}

impl Fielder {
    pub const fn new(distance: f32, angle: f32) -> Self {
        Self { distance, angle }
    }

    /// Check whether a ball landing at (distance, angle) is within this
    /// fielder's reach. Both comparisons are strict.
    pub fn in_catch_range(&self, distance: f32, angle: f32, range: &CatchRange) -> bool {
        let angular_gap = if range.wraparound {
            angle_delta(angle, self.angle)
        } else {
            (angle - self.angle).abs()
        };

        (distance - self.distance).abs() < range.distance && angular_gap < range.angle
    }
}

/// Catch tolerances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatchRange {
    /// Radial tolerance (cells)
    pub distance: f32,
    /// Angular tolerance (degrees)
    pub angle: f32,
    /// Measure angular gap modulo 360 so fielders near 0° also cover 359°
    pub wraparound: bool,
}

impl Default for CatchRange {
    fn default() -> Self {
        Self {
            distance: CATCH_DISTANCE,
            angle: CATCH_ANGLE,
            wraparound: true,
        }
    }
}

/// Standard field setting (12 fielders)
const STANDARD_FIELDERS: [Fielder; 12] = [
    Fielder::new(5.0, 90.0),
    Fielder::new(-3.0, 90.0),
    Fielder::new(4.0, 135.0),
    Fielder::new(-4.0, 225.0),
    Fielder::new(10.0, 315.0),
    Fielder::new(-10.0, 45.0),
    Fielder::new(4.0, 180.0),
    Fielder::new(-4.0, 180.0),
    Fielder::new(10.0, 45.0),
    Fielder::new(-10.0, 240.0),
    Fielder::new(-10.0, 300.0),
    Fielder::new(-10.0, 175.0),
];

/// A fielding formation (read-only for the whole match)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    fielders: Vec<Fielder>,
}

impl Default for Formation {
    fn default() -> Self {
        Self::standard()
    }
}

impl Formation {
    /// The standard 12-fielder preset
    pub fn standard() -> Self {
        Self {
            fielders: STANDARD_FIELDERS.to_vec(),
        }
    }

    /// Custom formation (used for isolated engine tests)
    pub fn new(fielders: Vec<Fielder>) -> Self {
        Self { fielders }
    }

    /// A formation with nobody in it - nothing is ever caught
    pub fn empty() -> Self {
        Self {
            fielders: Vec::new(),
        }
    }

    pub fn fielders(&self) -> &[Fielder] {
        &self.fielders
    }

    pub fn len(&self) -> usize {
        self.fielders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fielders.is_empty()
    }

    /// Index of the first fielder who takes the catch, if any
    pub fn catcher(&self, ball: PolarCoordinate, range: &CatchRange) -> Option<usize> {
        self.fielders
            .iter()
            .position(|f| f.in_catch_range(ball.distance, ball.angle, range))
    }
}

/// Returns true if any fielder catches a ball landing at (distance, angle)
pub fn is_caught(distance: f32, angle: f32, fielders: &[Fielder], range: &CatchRange) -> bool {
    fielders
        .iter()
        .any(|f| f.in_catch_range(distance, angle, range))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(distance: f32, angle: f32) -> Vec<Fielder> {
        vec![Fielder::new(distance, angle)]
    }

    #[test]
    fn test_standard_formation_has_twelve_fielders() {
        let formation = Formation::standard();
        assert_eq!(formation.len(), 12);
        assert_eq!(formation.fielders()[0], Fielder::new(5.0, 90.0));
        assert_eq!(formation.fielders()[11], Fielder::new(-10.0, 175.0));
    }

    #[test]
    fn test_catch_inside_tolerance() {
        let fielders = single(5.0, 90.0);
        let range = CatchRange::default();
        assert!(is_caught(5.0, 90.0, &fielders, &range));
        assert!(is_caught(3.1, 75.5, &fielders, &range));
        assert!(is_caught(6.9, 104.9, &fielders, &range));
    }

    #[test]
    fn test_catch_boundaries_are_exclusive() {
        let fielders = single(5.0, 90.0);
        let range = CatchRange::default();
        assert!(!is_caught(7.0, 90.0, &fielders, &range));
        assert!(!is_caught(3.0, 90.0, &fielders, &range));
        assert!(!is_caught(5.0, 105.0, &fielders, &range));
        assert!(!is_caught(5.0, 75.0, &fielders, &range));
    }

    #[test]
    fn test_catch_wraparound_seam() {
        let fielders = single(8.0, 355.0);
        let modular = CatchRange::default();
        let naive = CatchRange {
            wraparound: false,
            ..CatchRange::default()
        };

        assert!(is_caught(8.0, 5.0, &fielders, &modular));
        assert!(!is_caught(8.0, 5.0, &fielders, &naive));
        // Away from the seam both agree
        assert!(is_caught(8.0, 350.0, &fielders, &naive));
        assert!(is_caught(8.0, 350.0, &fielders, &modular));
    }

    #[test]
    fn test_negative_distance_fielder_never_reaches_ball() {
        // Ball distances are non-negative, so |d - (-10)| >= 10
        let fielders = single(-10.0, 45.0);
        let range = CatchRange::default();
        for d in 0..=17 {
            assert!(!is_caught(d as f32, 45.0, &fielders, &range));
        }
    }

    #[test]
    fn test_catcher_reports_first_matching_index() {
        let formation = Formation::new(vec![
            Fielder::new(10.0, 0.0),
            Fielder::new(5.0, 90.0),
            Fielder::new(5.5, 95.0),
        ]);
        let ball = PolarCoordinate::new(5.0, 92.0);
        assert_eq!(formation.catcher(ball, &CatchRange::default()), Some(1));
        assert_eq!(Formation::empty().catcher(ball, &CatchRange::default()), None);
    }
}
