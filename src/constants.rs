// Default initial condition: a displacement impulse on mass 1
pub const INITIAL_DISPLACEMENT: f64 = 0.03; // meters

// Scene layout (renderer-facing)
pub const PHASE_VIEW_MARGIN: f64 = 0.1; // meters either side of the rail
pub const PHASE_VIEW_HALF_HEIGHT: f64 = 0.05; // meters
pub const SERIES_VIEW_MARGIN: f64 = 0.01; // meters above/below the extreme displacement
pub const FRAME_INTERVAL_MS: u64 = 10;

// Upper bound on trajectory storage reserved before a run starts
pub const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;

// Number of equal gaps the rest length is divided into (walls + 3 masses)
pub const SEGMENTS: f64 = 4.0;

// Math
pub const PI: f64 = std::f64::consts::PI;
