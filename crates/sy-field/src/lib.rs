// Animated shape field generation for synesthe.

pub mod generator;

pub use generator::generate_field;
