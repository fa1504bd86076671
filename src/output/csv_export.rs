use crate::errors::SimulationError;
use crate::models::Trajectory;
use crate::render::project_frame;
use csv::Writer;
use serde::Serialize;
use std::fs::{self, File};
use std::io;
use std::path::Path;

#[derive(Debug, Serialize)]
struct FrameRow {
    frame: usize,
    t: f64,
    marker1: f64,
    marker2: f64,
    marker3: f64,
}

/// Writes `t,x1,x2,x3` rows, one per sample.
pub fn write_trajectory<W: io::Write>(
    sink: W,
    trajectory: &Trajectory,
) -> Result<(), SimulationError> {
    let mut writer = Writer::from_writer(sink);
    for sample in trajectory.samples() {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the projected marker positions, one row per animation frame.
pub fn write_frames<W: io::Write>(
    sink: W,
    trajectory: &Trajectory,
    rest_length: f64,
) -> Result<(), SimulationError> {
    let mut writer = Writer::from_writer(sink);
    for index in 0..trajectory.len() {
        let frame = project_frame(trajectory, rest_length, index)?;
        writer.serialize(FrameRow {
            frame: frame.index,
            t: frame.time,
            marker1: frame.markers[0],
            marker2: frame.markers[1],
            marker3: frame.markers[2],
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_trajectory_csv(path: &Path, trajectory: &Trajectory) -> Result<(), SimulationError> {
    write_trajectory(create_file(path)?, trajectory)
}

pub fn write_frames_csv(
    path: &Path,
    trajectory: &Trajectory,
    rest_length: f64,
) -> Result<(), SimulationError> {
    write_frames(create_file(path)?, trajectory, rest_length)
}

// Creates parent directories as needed
fn create_file(path: &Path) -> Result<File, SimulationError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
