pub mod moving_average;
pub mod peaks;
pub mod statistics;
