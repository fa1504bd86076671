use crate::errors::SimulationError;
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Physical and numerical configuration of a three-mass, four-spring chain.
///
/// Spring `k1` ties mass 1 to the left wall, `k2` and `k3` join neighbouring
/// masses and `k4` ties mass 3 to the right wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub m1: f64, // kg
    pub m2: f64,
    pub m3: f64,
    pub k1: f64, // N/m
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
    pub rest_length: f64, // wall-to-wall distance (m)
    pub dt: f64,          // integration step (s)
    pub t_max: f64,       // horizon (s)
}

impl SimulationParameters {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m1: f64,
        m2: f64,
        m3: f64,
        k1: f64,
        k2: f64,
        k3: f64,
        k4: f64,
        rest_length: f64,
        dt: f64,
        t_max: f64,
    ) -> Result<Self, SimulationError> {
        let params = SimulationParameters {
            m1,
            m2,
            m3,
            k1,
            k2,
            k3,
            k4,
            rest_length,
            dt,
            t_max,
        };
        params.validate()?;
        Ok(params)
    }

    /// Rejects anything that would make the force-to-acceleration step
    /// undefined or the time loop meaningless.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let strictly_positive = [
            ("m1", self.m1),
            ("m2", self.m2),
            ("m3", self.m3),
            ("rest_length", self.rest_length),
            ("dt", self.dt),
            ("t_max", self.t_max),
        ];
        let non_negative = [
            ("k1", self.k1),
            ("k2", self.k2),
            ("k3", self.k3),
            ("k4", self.k4),
        ];

        for (name, value) in strictly_positive.iter().chain(non_negative.iter()) {
            if !value.is_finite() {
                return Err(SimulationError::InvalidParameter {
                    name: *name,
                    value: *value,
                    reason: "must be finite",
                });
            }
        }
        for (name, value) in strictly_positive {
            if value <= 0.0 {
                return Err(SimulationError::InvalidParameter {
                    name,
                    value,
                    reason: "must be greater than zero",
                });
            }
        }
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(SimulationError::InvalidParameter {
                    name,
                    value,
                    reason: "must not be negative",
                });
            }
        }
        Ok(())
    }

    pub fn masses(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.m1, self.m2, self.m3)
    }

    pub fn spring_constants(&self) -> na::Vector4<f64> {
        na::Vector4::new(self.k1, self.k2, self.k3, self.k4)
    }

    /// `ceil(t_max / dt)`: the number of samples a full run records.
    /// Saturates at `usize::MAX` for horizons too long to count.
    pub fn step_count(&self) -> usize {
        let quotient = (self.t_max / self.dt).ceil();
        if quotient >= usize::MAX as f64 {
            return usize::MAX;
        }
        let mut steps = quotient as usize;
        // The quotient can round either way; settle on the strict `t < t_max` bound.
        while steps > 0 && ((steps - 1) as f64) * self.dt >= self.t_max {
            steps -= 1;
        }
        while steps < usize::MAX && (steps as f64) * self.dt < self.t_max {
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain::DemoChain;
    use test_case::test_case;

    fn demo() -> SimulationParameters {
        DemoChain::parameters()
    }

    #[test]
    fn demo_parameters_are_valid() {
        assert!(demo().validate().is_ok());
    }

    fn demo_with(name: &str, value: f64) -> SimulationParameters {
        let mut params = demo();
        match name {
            "m1" => params.m1 = value,
            "m2" => params.m2 = value,
            "m3" => params.m3 = value,
            "k2" => params.k2 = value,
            "k4" => params.k4 = value,
            "rest_length" => params.rest_length = value,
            "dt" => params.dt = value,
            "t_max" => params.t_max = value,
            _ => unreachable!("unknown parameter {}", name),
        }
        params
    }

    #[test_case("m1", 0.0; "zero mass")]
    #[test_case("m3", -0.15; "negative mass")]
    #[test_case("k2", -1.0; "negative spring constant")]
    #[test_case("dt", 0.0; "zero time step")]
    #[test_case("t_max", -5.0; "negative horizon")]
    #[test_case("rest_length", 0.0; "zero rest length")]
    #[test_case("k4", f64::NAN; "nan spring constant")]
    #[test_case("m2", f64::INFINITY; "infinite mass")]
    fn test_rejects_invalid(parameter: &str, value: f64) {
        match demo_with(parameter, value).validate() {
            Err(SimulationError::InvalidParameter { name, .. }) => assert_eq!(name, parameter),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn zero_spring_constants_are_valid() {
        let params = SimulationParameters::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.1, 1.0);
        assert!(params.is_ok());
    }

    #[test_case(0.01, 5.0 => 500; "demo horizon")]
    #[test_case(0.25, 1.0 => 4; "exact division")]
    #[test_case(0.3, 1.0 => 4; "partial last step")]
    #[test_case(2.0, 1.0 => 1; "step longer than horizon")]
    #[test_case(1e-12, 1.0 => 1_000_000_000_000; "tiny step")]
    #[test_case(1.0, 1e20 => usize::MAX; "horizon beyond usize")]
    fn test_step_count(dt: f64, t_max: f64) -> usize {
        let mut params = demo();
        params.dt = dt;
        params.t_max = t_max;
        params.step_count()
    }
}
