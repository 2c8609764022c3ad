pub mod composer;
pub mod heading;
pub mod rotation;

pub use composer::{
    compose_to_access, compose_to_earth_fixed, nadir_to_access, sensor_to_access,
    sensor_to_earth_fixed,
};
pub use heading::HeadingSet;
pub use rotation::{body_fixed_to_nadir, euler_rotation};
