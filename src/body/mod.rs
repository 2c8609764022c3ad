pub mod central_body;

pub use central_body::{
    cartesian_to_spherical, fixed_to_topocentric, gmst, spherical_to_cartesian,
    topocentric_to_fixed, wrap_pi, wrap_two_pi, CentralBody, SubSatellitePoint, MU_EARTH,
    R_EARTH,
};
