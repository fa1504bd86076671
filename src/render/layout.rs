use crate::constants::{
    FRAME_INTERVAL_MS, PHASE_VIEW_HALF_HEIGHT, PHASE_VIEW_MARGIN, SERIES_VIEW_MARGIN,
};
use crate::models::Trajectory;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub fn new(min: f64, max: f64) -> Self {
        Limits { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Axis setup for the two views: the rail with the moving masses on top and
/// the displacement time series below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub phase_x: Limits,
    pub phase_y: Limits,
    /// Dashed line between the two walls.
    pub rail: Limits,
    pub series_t: Limits,
    pub series_x: Limits,
    pub frame_count: usize,
    pub frame_interval_ms: u64,
}

impl SceneLayout {
    pub fn new(trajectory: &Trajectory, rest_length: f64, t_max: f64) -> Self {
        let half = rest_length / 2.0;
        let (lo, hi) = trajectory.displacement_bounds().unwrap_or((0.0, 0.0));

        SceneLayout {
            phase_x: Limits::new(-half - PHASE_VIEW_MARGIN, half + PHASE_VIEW_MARGIN),
            phase_y: Limits::new(-PHASE_VIEW_HALF_HEIGHT, PHASE_VIEW_HALF_HEIGHT),
            rail: Limits::new(-half, half),
            series_t: Limits::new(0.0, t_max),
            series_x: Limits::new(lo - SERIES_VIEW_MARGIN, hi + SERIES_VIEW_MARGIN),
            frame_count: trajectory.len(),
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}
