use crate::constants::MAX_PREALLOCATED_SAMPLES;
use crate::errors::SimulationError;
use crate::fsm::RunState;
use crate::integrators::semi_implicit_euler::SemiImplicitEuler;
use crate::models::{ChainState, Sample, SimulationParameters, Trajectory};
use crate::physics::energy::calculate_energy;
use crate::physics::modes::normal_modes;
use crate::physics::springs::SpringChain;

/// Drives a [`SpringChain`] from its initial state to `t_max` with a fixed
/// step, recording one sample per step.
pub struct Simulator {
    params: SimulationParameters,
    integrator: SemiImplicitEuler<SpringChain>,
    state: ChainState,
    initial_energy: f64,
    steps_taken: usize,
    trajectory: Trajectory,
}

impl Simulator {
    /// Starts from the default impulse on mass 1.
    pub fn new(params: SimulationParameters) -> Result<Self, SimulationError> {
        Self::with_initial_state(params, ChainState::default())
    }

    pub fn with_initial_state(
        params: SimulationParameters,
        state: ChainState,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        let chain = SpringChain::from_parameters(&params);
        let initial_energy = calculate_energy(&chain, &state);
        let capacity = params.step_count().min(MAX_PREALLOCATED_SAMPLES);

        Ok(Simulator {
            params,
            integrator: SemiImplicitEuler::new(chain),
            state,
            initial_energy,
            steps_taken: 0,
            trajectory: Trajectory::with_capacity(capacity),
        })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn chain(&self) -> &SpringChain {
        self.integrator.equations()
    }

    pub fn state(&self) -> &ChainState {
        &self.state
    }

    /// Time stamp of the next step.
    pub fn time(&self) -> f64 {
        self.steps_taken as f64 * self.params.dt
    }

    pub fn run_state(&self) -> RunState {
        RunState::at(self.time(), self.params.t_max)
    }

    pub fn energy(&self) -> f64 {
        calculate_energy(self.chain(), &self.state)
    }

    /// Relative change of total energy since the start of the run.
    /// Absolute change when the run started with no energy.
    pub fn energy_error(&self) -> f64 {
        let delta = (self.energy() - self.initial_energy).abs();
        if self.initial_energy > 0.0 {
            delta / self.initial_energy
        } else {
            delta
        }
    }

    /// Advances one step and records it. Returns `None` once the horizon is reached.
    pub fn step(&mut self) -> Option<Sample> {
        if self.run_state().is_complete() {
            return None;
        }

        let t = self.time();
        self.state = self.integrator.integrate(&self.state, self.params.dt);
        let sample = Sample {
            t,
            x1: self.state.position[0],
            x2: self.state.position[1],
            x3: self.state.position[2],
        };
        self.trajectory.push(sample);
        self.steps_taken += 1;

        Some(sample)
    }

    /// Runs to `t_max`. Calling again after completion is a no-op.
    pub fn run(&mut self) -> &Trajectory {
        if self.steps_taken == 0 {
            log::info!(
                "Starting run: dt = {} s, t_max = {} s, {} steps",
                self.params.dt,
                self.params.t_max,
                self.params.step_count()
            );
            for (i, mode) in normal_modes(self.chain()).iter().enumerate() {
                log::debug!(
                    "Normal mode {}: omega = {:.4} rad/s, period = {:.4} s, shape = [{:.3}, {:.3}, {:.3}]",
                    i + 1,
                    mode.angular_frequency,
                    mode.period(),
                    mode.shape[0],
                    mode.shape[1],
                    mode.shape[2]
                );
            }
        }

        let was_running = !self.run_state().is_complete();
        while self.step().is_some() {}

        if was_running {
            log::info!(
                "Run {}: {} samples, relative energy error {:.3e}",
                self.run_state(),
                self.trajectory.len(),
                self.energy_error()
            );
        }
        &self.trajectory
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Hands the recorded trajectory over, discarding the kinematic state.
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain::DemoChain;
    use approx::assert_abs_diff_eq;
    use nalgebra as na;

    #[test]
    fn rejects_zero_mass() {
        let mut params = DemoChain::parameters();
        params.m2 = 0.0;
        assert!(matches!(
            Simulator::new(params),
            Err(SimulationError::InvalidParameter { name: "m2", .. })
        ));
    }

    #[test]
    fn step_records_start_time_and_updated_position() {
        let mut simulator = Simulator::new(DemoChain::parameters()).unwrap();
        assert_eq!(simulator.run_state(), RunState::Running);

        let first = simulator.step().unwrap();
        assert_eq!(first.t, 0.0);
        assert_abs_diff_eq!(first.x1, 0.0297, epsilon = 1e-12);
        assert_abs_diff_eq!(first.x2, 0.0001, epsilon = 1e-12);
        assert_eq!(first.x3, 0.0);

        let second = simulator.step().unwrap();
        assert_eq!(second.t, DemoChain::DT);
        assert_eq!(simulator.trajectory().len(), 2);
    }

    #[test]
    fn run_is_idempotent() {
        let mut simulator = Simulator::new(DemoChain::parameters()).unwrap();
        let first_len = simulator.run().len();
        let final_state = *simulator.state();

        assert_eq!(simulator.run_state(), RunState::Complete);
        assert_eq!(simulator.run().len(), first_len);
        assert_eq!(*simulator.state(), final_state);
        assert!(simulator.step().is_none());
    }

    #[test]
    fn tiny_step_builds_without_reserving_full_run() {
        let mut params = DemoChain::parameters();
        params.dt = 1e-12;
        params.t_max = 1.0;
        let mut simulator = Simulator::new(params).unwrap();

        for i in 0..10 {
            let sample = simulator.step().unwrap();
            assert_eq!(sample.t, i as f64 * 1e-12);
        }
        assert_eq!(simulator.trajectory().len(), 10);
        assert_eq!(simulator.run_state(), RunState::Running);
        assert_eq!(simulator.run_state().to_string(), "Running");
    }

    #[test]
    fn resting_chain_has_zero_energy_error() {
        let params = DemoChain::parameters();
        let mut simulator =
            Simulator::with_initial_state(params, ChainState::at_rest(na::Vector3::zeros())).unwrap();
        simulator.run();
        assert_eq!(simulator.energy(), 0.0);
        assert_eq!(simulator.energy_error(), 0.0);
    }

    #[test]
    fn horizon_shorter_than_step_records_one_sample() {
        let mut params = DemoChain::parameters();
        params.t_max = params.dt / 2.0;
        let trajectory = {
            let mut simulator = Simulator::new(params).unwrap();
            simulator.run();
            simulator.into_trajectory()
        };
        assert_eq!(trajectory.len(), 1);
    }
}
