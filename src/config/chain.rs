use crate::models::SimulationParameters;

/// The symmetric demo chain: equal masses, stiff wall springs, soft coupling.
pub struct DemoChain;

impl DemoChain {
    pub const MASS: f64 = 0.15; // kg
    pub const K_WALL: f64 = 10.0; // N/m
    pub const K_COUPLING: f64 = 5.0; // N/m
    pub const REST_LENGTH: f64 = 0.4; // meters
    pub const DT: f64 = 0.01; // seconds
    pub const T_MAX: f64 = 5.0; // seconds

    pub fn parameters() -> SimulationParameters {
        SimulationParameters {
            m1: Self::MASS,
            m2: Self::MASS,
            m3: Self::MASS,
            k1: Self::K_WALL,
            k2: Self::K_COUPLING,
            k3: Self::K_COUPLING,
            k4: Self::K_WALL,
            rest_length: Self::REST_LENGTH,
            dt: Self::DT,
            t_max: Self::T_MAX,
        }
    }
}
