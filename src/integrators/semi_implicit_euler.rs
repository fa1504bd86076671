use crate::models::ChainState;
use crate::physics::dynamics::EquationsOfMotion;

/// Symplectic (semi-implicit) Euler: kick the velocity with the current
/// acceleration, then drift the position with the updated velocity.
pub struct SemiImplicitEuler<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> SemiImplicitEuler<T> {
    pub fn new(eom: T) -> Self {
        SemiImplicitEuler { eom }
    }

    pub fn equations(&self) -> &T {
        &self.eom
    }

    pub fn integrate(&self, state: &ChainState, dt: f64) -> ChainState {
        let acceleration = self.eom.compute_acceleration(&state.position);
        let velocity = state.velocity + acceleration * dt;
        let position = state.position + velocity * dt;

        ChainState { position, velocity }
    }
}
