pub mod config;
pub mod runner;

pub use config::{EulerOffset, OrbitConfig, RunConfig, SensorConfig, SensorShape};
pub use runner::{run_pass, sample_at, FootprintSample};
