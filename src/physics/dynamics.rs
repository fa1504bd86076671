use nalgebra as na;

/// Second-order dynamics whose acceleration depends on position only.
pub trait EquationsOfMotion {
    fn compute_acceleration(&self, position: &na::Vector3<f64>) -> na::Vector3<f64>;
}
