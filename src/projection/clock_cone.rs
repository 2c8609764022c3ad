use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;

use crate::body::cartesian_to_spherical;

/// Heading direction relative to the access-frame nadir axis (+z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockCone {
    pub clock: f64, // rad, [0, 2pi), azimuth about +z from +x
    pub cone: f64,  // rad, [0, pi], angle from +z
}

impl ClockCone {
    pub fn new(clock: f64, cone: f64) -> Self {
        Self { clock, cone }
    }

    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let (sin_cone, cos_cone) = self.cone.sin_cos();
        let (sin_clock, cos_clock) = self.clock.sin_cos();
        Vector3::new(sin_cone * cos_clock, sin_cone * sin_clock, cos_cone)
    }
}

/// Clock/cone of a direction given in the spacecraft-access frame.
///
/// The direction is read as a point on the unit sphere: clock is its
/// spherical longitude, cone is the colatitude (pi/2 - latitude).
pub fn to_clock_cone(direction: &Vector3<f64>) -> ClockCone {
    let (lat, lon, _) = cartesian_to_spherical(direction, 1.0);
    ClockCone {
        clock: lon,
        cone: FRAC_PI_2 - lat,
    }
}

/// Order-preserving batch form of [`to_clock_cone`].
pub fn to_clock_cone_batch<'a, I>(directions: I) -> Vec<ClockCone>
where
    I: IntoIterator<Item = &'a Vector3<f64>>,
{
    directions.into_iter().map(to_clock_cone).collect()
}
