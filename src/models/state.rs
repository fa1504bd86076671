use crate::constants::INITIAL_DISPLACEMENT;
use nalgebra as na;

/// Kinematic state of the chain: displacement from equilibrium and velocity
/// of each mass, indexed 0..3 for masses 1..3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainState {
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
}

impl ChainState {
    pub fn new(position: na::Vector3<f64>, velocity: na::Vector3<f64>) -> Self {
        ChainState { position, velocity }
    }

    pub fn at_rest(position: na::Vector3<f64>) -> Self {
        ChainState {
            position,
            velocity: na::Vector3::zeros(),
        }
    }

    pub fn zero() -> Self {
        ChainState::at_rest(na::Vector3::zeros())
    }
}

impl Default for ChainState {
    /// Mass 1 displaced, everything else at rest.
    fn default() -> Self {
        ChainState::at_rest(na::Vector3::new(INITIAL_DISPLACEMENT, 0.0, 0.0))
    }
}
