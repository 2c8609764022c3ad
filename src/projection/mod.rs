pub mod clock_cone;
pub mod projector;

pub use clock_cone::{to_clock_cone, to_clock_cone_batch, ClockCone};
pub use projector::{horizon_cone, project, GroundPoint};
