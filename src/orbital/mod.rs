pub mod elements;
pub mod propagator;

pub use elements::KeplerianElements;
pub use propagator::{propagate_orbit, OrbitState};
