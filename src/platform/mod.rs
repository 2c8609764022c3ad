pub mod sensor;
pub mod spacecraft;

pub use sensor::{Sensor, SensorBuilder};
pub use spacecraft::SpacecraftState;
