//! Circular ground grid
//!
//! The ground is a fixed-size grid of cell markers classified by their
//! distance to the center: outer boundary ring, inner ring, grass, or
//! out of play. A pitch strip and the fielders are overlaid on top.
//! Rebuilding is cheap, so every animation frame may start from a fresh grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::field::Formation;
use crate::consts::*;
use crate::{center_coords, distance_between, polar_to_cartesian};

/// Ground dimensions and zone radii
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSpec {
    pub width: u32,
    pub height: u32,
    /// Radius of the inner (30-yard) ring
    pub inner_radius: f32,
    /// Radius of the boundary rope
    pub outer_radius: f32,
}

impl Default for GroundSpec {
    fn default() -> Self {
        Self {
            width: GROUND_WIDTH,
            height: GROUND_HEIGHT,
            inner_radius: INNER_RADIUS,
            outer_radius: OUTER_RADIUS,
        }
    }
}

impl GroundSpec {
    /// Square ground whose radii scale with the grid width
    pub fn proportional(width: u32) -> Self {
        Self {
            width,
            height: width,
            inner_radius: INNER_RADIUS_RATIO * width as f32,
            outer_radius: OUTER_RADIUS_RATIO * width as f32,
        }
    }

    /// Half the grid width, floored
    #[inline]
    pub fn ground_radius(&self) -> f32 {
        (self.width / 2) as f32
    }

    /// Longest distance a shot can travel
    #[inline]
    pub fn max_shot_radius(&self) -> f32 {
        self.ground_radius() + SHOT_OVERRUN
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        center_coords(self.width, self.height)
    }
}

/// What occupies a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    OuterBoundary,
    InnerBoundary,
    Grass,
    Pitch,
    Fielder,
    Ball,
    /// Beyond the boundary rope
    Outside,
}

/// A fully populated ground grid
#[derive(Debug, Clone)]
pub struct Ground {
    spec: GroundSpec,
    center: IVec2,
    cells: Vec<Cell>,
}

impl Ground {
    /// Build the ground: rings, grass, pitch, then fielders
    pub fn build(spec: GroundSpec, formation: &Formation) -> Self {
        let mut ground = Self::rings(spec);
        ground.add_pitch();
        ground.place_fielders(formation);
        ground
    }

    /// Bare ground with only the distance-classified cells
    fn rings(spec: GroundSpec) -> Self {
        let center = spec.center();
        let center_f = center.as_vec2();
        let capacity = (spec.width as usize)
            .checked_mul(spec.height as usize)
            .unwrap_or(0);
        let mut cells = Vec::with_capacity(capacity);

        for y in 0..spec.height {
            for x in 0..spec.width {
                let point = IVec2::new(x as i32, y as i32).as_vec2();
                let d = distance_between(point, center_f);
                cells.push(classify_cell(d, &spec));
            }
        }

        Self {
            spec,
            center,
            cells,
        }
    }

    /// Vertical strip of 5 cells through the center
    fn add_pitch(&mut self) {
        for dy in -PITCH_HALF_LENGTH..=PITCH_HALF_LENGTH {
            let point = self.center + IVec2::new(0, dy);
            self.set(point, Cell::Pitch);
        }
    }

    /// Mark each fielder's projected cell; off-grid fielders are skipped
    fn place_fielders(&mut self, formation: &Formation) {
        for fielder in formation.fielders() {
            let point = polar_to_cartesian(self.center, fielder.distance, fielder.angle);
            self.set(point, Cell::Fielder);
        }
    }

    /// Mark the ball's cell for an animation frame. Returns false if the
    /// ball has left the grid.
    pub fn mark_ball(&mut self, point: IVec2) -> bool {
        self.set(point, Cell::Ball)
    }

    fn index(&self, point: IVec2) -> Option<usize> {
        let in_bounds = point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.spec.width
            && (point.y as u32) < self.spec.height;
        in_bounds.then(|| point.y as usize * self.spec.width as usize + point.x as usize)
    }

    fn set(&mut self, point: IVec2, cell: Cell) -> bool {
        match self.index(point) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Cell at a grid point (None when off-grid)
    pub fn get(&self, point: IVec2) -> Option<Cell> {
        self.index(point).map(|i| self.cells[i])
    }

    pub fn spec(&self) -> &GroundSpec {
        &self.spec
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn width(&self) -> u32 {
        self.spec.width
    }

    pub fn height(&self) -> u32 {
        self.spec.height
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.spec.width.max(1) as usize)
    }

    /// Number of cells of a given kind
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}

/// Classify a cell from its distance to center. Ring checks come first.
fn classify_cell(d: f32, spec: &GroundSpec) -> Cell {
    if (d - spec.outer_radius).abs() < RING_TOLERANCE {
        Cell::OuterBoundary
    } else if (d - spec.inner_radius).abs() < RING_TOLERANCE {
        Cell::InnerBoundary
    } else if d < spec.outer_radius {
        Cell::Grass
    } else {
        Cell::Outside
    }
}
