pub mod reading;
pub mod theme;
