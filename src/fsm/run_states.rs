use std::fmt;

/// Lifecycle of a run. A run only ever moves from `Running` to `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Complete,
}

impl RunState {
    pub fn at(t: f64, t_max: f64) -> Self {
        if t < t_max {
            RunState::Running
        } else {
            RunState::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, RunState::Complete)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunState::Running => write!(f, "Running"),
            RunState::Complete => write!(f, "Complete"),
        }
    }
}
