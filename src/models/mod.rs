pub mod parameters;
pub mod state;
pub mod trajectory;

pub use parameters::SimulationParameters;
pub use state::ChainState;
pub use trajectory::{Sample, Trajectory};
