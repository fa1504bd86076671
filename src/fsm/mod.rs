pub mod run_states;

pub use run_states::RunState;
