//! Renderer-facing projections of a finished [`Trajectory`](crate::models::Trajectory).
//!
//! Nothing here draws. A renderer asks for the [`SceneLayout`] once and then
//! calls [`project_frame`] for each frame index, so animation timing never
//! touches the data that was generated.

pub mod frame;
pub mod layout;

pub use frame::{equilibrium_positions, project_frame, Frame};
pub use layout::{Limits, SceneLayout};
