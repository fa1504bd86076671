pub mod dynamics;
pub mod energy;
pub mod modes;
pub mod springs;
