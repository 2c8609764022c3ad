pub mod body;
pub mod error;
pub mod footprint;
pub mod frames;
pub mod io;
pub mod orbital;
pub mod platform;
pub mod projection;
pub mod sim;

pub use body::{CentralBody, SubSatellitePoint};
pub use error::{FootprintError, ProjectionError, Result};
pub use footprint::{Footprint, FootprintExtractor};
pub use frames::HeadingSet;
pub use platform::{Sensor, SensorBuilder, SpacecraftState};
pub use projection::{project, to_clock_cone, to_clock_cone_batch, ClockCone, GroundPoint};
pub use sim::{run_pass, FootprintSample, RunConfig};
