use super::dynamics::EquationsOfMotion;
use crate::models::SimulationParameters;
use nalgebra as na;

/// Three masses on a line held between two walls by four linear springs:
/// wall -k1- m1 -k2- m2 -k3- m3 -k4- wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringChain {
    masses: na::Vector3<f64>,
    springs: na::Vector4<f64>,
}

impl SpringChain {
    pub fn new(masses: na::Vector3<f64>, springs: na::Vector4<f64>) -> Self {
        Self { masses, springs }
    }

    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self::new(params.masses(), params.spring_constants())
    }

    pub fn masses(&self) -> &na::Vector3<f64> {
        &self.masses
    }

    pub fn spring_constants(&self) -> &na::Vector4<f64> {
        &self.springs
    }

    /// Net spring force on each mass from the two springs flanking it.
    pub fn forces(&self, x: &na::Vector3<f64>) -> na::Vector3<f64> {
        let (k1, k2, k3, k4) = (self.springs[0], self.springs[1], self.springs[2], self.springs[3]);
        na::Vector3::new(
            -k1 * x[0] - k2 * (x[0] - x[1]),
            -k3 * (x[1] - x[2]) - k2 * (x[1] - x[0]),
            -k3 * (x[2] - x[1]) - k4 * x[2],
        )
    }

    /// K such that F = -K x.
    pub fn stiffness_matrix(&self) -> na::Matrix3<f64> {
        let (k1, k2, k3, k4) = (self.springs[0], self.springs[1], self.springs[2], self.springs[3]);
        na::Matrix3::new(
            k1 + k2, -k2, 0.0, //
            -k2, k2 + k3, -k3, //
            0.0, -k3, k3 + k4,
        )
    }
}

impl EquationsOfMotion for SpringChain {
    fn compute_acceleration(&self, position: &na::Vector3<f64>) -> na::Vector3<f64> {
        self.forces(position).component_div(&self.masses)
    }
}
