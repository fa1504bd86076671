use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum SimulationError {
    IoError(io::Error),
    CsvError(csv::Error),
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    FrameOutOfRange {
        frame: usize,
        len: usize,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::IoError(e) => write!(f, "I/O error: {}", e),
            SimulationError::CsvError(e) => write!(f, "CSV error: {}", e),
            SimulationError::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "Invalid parameter {} = {}: {}", name, value, reason),
            SimulationError::FrameOutOfRange { frame, len } => {
                write!(f, "Frame {} out of range for trajectory of {} samples", frame, len)
            }
        }
    }
}

impl Error for SimulationError {}

impl From<io::Error> for SimulationError {
    fn from(err: io::Error) -> Self {
        SimulationError::IoError(err)
    }
}

impl From<csv::Error> for SimulationError {
    fn from(err: csv::Error) -> Self {
        SimulationError::CsvError(err)
    }
}
