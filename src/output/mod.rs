pub mod csv_export;

pub use csv_export::{write_frames, write_frames_csv, write_trajectory, write_trajectory_csv};
