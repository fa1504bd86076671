pub mod semi_implicit_euler;
