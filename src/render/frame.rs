use crate::constants::SEGMENTS;
use crate::errors::SimulationError;
use crate::models::Trajectory;

/// Everything a renderer needs to draw one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub index: usize,
    pub time: f64,
    /// Absolute marker positions on the rail.
    pub markers: [f64; 3],
    /// Series drawn so far: samples `0..index`, current frame excluded.
    pub time_series: &'a [f64],
    pub x1_series: &'a [f64],
    pub x2_series: &'a [f64],
    pub x3_series: &'a [f64],
}

/// Rest positions of the three masses on a rail centred at zero.
pub fn equilibrium_positions(rest_length: f64) -> [f64; 3] {
    let spacing = rest_length / SEGMENTS;
    let left_wall = -rest_length / 2.0;
    [1.0, 2.0, 3.0].map(|k| left_wall + k * spacing)
}

pub fn project_frame(
    trajectory: &Trajectory,
    rest_length: f64,
    index: usize,
) -> Result<Frame<'_>, SimulationError> {
    let sample = trajectory
        .sample(index)
        .ok_or(SimulationError::FrameOutOfRange {
            frame: index,
            len: trajectory.len(),
        })?;
    let [e1, e2, e3] = equilibrium_positions(rest_length);

    Ok(Frame {
        index,
        time: sample.t,
        markers: [e1 + sample.x1, e2 + sample.x2, e3 + sample.x3],
        time_series: &trajectory.time()[..index],
        x1_series: &trajectory.x1()[..index],
        x2_series: &trajectory.x2()[..index],
        x3_series: &trajectory.x3()[..index],
    })
}
