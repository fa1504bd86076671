use super::springs::SpringChain;
use crate::constants::PI;
use nalgebra as na;

/// A pattern in which every mass oscillates at the same angular frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalMode {
    pub angular_frequency: f64, // rad/s
    /// Relative displacement of each mass, scaled so the largest component is +1.
    pub shape: na::Vector3<f64>,
}

impl NormalMode {
    pub fn frequency(&self) -> f64 {
        self.angular_frequency / (2.0 * PI)
    }

    /// Infinite for a zero-frequency (free) mode.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency()
    }
}

/// Solves K x = ω² M x through the symmetric form M^{-1/2} K M^{-1/2}.
/// Modes are returned in ascending frequency.
pub fn normal_modes(chain: &SpringChain) -> [NormalMode; 3] {
    let inv_sqrt_mass = na::Matrix3::from_diagonal(&chain.masses().map(|m| 1.0 / m.sqrt()));
    let reduced = inv_sqrt_mass * chain.stiffness_matrix() * inv_sqrt_mass;
    let eigen = na::SymmetricEigen::new(reduced);

    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

    order.map(|i| {
        let shape = inv_sqrt_mass * eigen.eigenvectors.column(i);
        let pivot = shape[shape.iamax()];
        NormalMode {
            // Round-off can push a zero eigenvalue slightly negative
            angular_frequency: eigen.eigenvalues[i].max(0.0).sqrt(),
            shape: shape / pivot,
        }
    })
}
