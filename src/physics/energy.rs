use super::springs::SpringChain;
use crate::models::ChainState;

pub fn kinetic_energy(chain: &SpringChain, state: &ChainState) -> f64 {
    0.5 * chain
        .masses()
        .iter()
        .zip(state.velocity.iter())
        .map(|(m, v)| m * v * v)
        .sum::<f64>()
}

/// Elastic energy stored in the four springs.
pub fn potential_energy(chain: &SpringChain, state: &ChainState) -> f64 {
    let k = chain.spring_constants();
    let x = &state.position;
    let extensions = [x[0], x[1] - x[0], x[2] - x[1], -x[2]];

    0.5 * k
        .iter()
        .zip(extensions.iter())
        .map(|(k, dx)| k * dx * dx)
        .sum::<f64>()
}

pub fn calculate_energy(chain: &SpringChain, state: &ChainState) -> f64 {
    kinetic_energy(chain, state) + potential_energy(chain, state)
}
