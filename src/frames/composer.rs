use nalgebra::{Matrix3, Vector3};

use super::heading::HeadingSet;
use crate::body::{fixed_to_topocentric, CentralBody};
use crate::error::{FootprintError, Result};

// ---------------------------------------------------------------------------
// Nadir -> spacecraft-access
// ---------------------------------------------------------------------------

/// Nadir -> spacecraft-access rotation derived from the Earth-fixed velocity.
///
/// The velocity is expressed in south-east-zenith components at the
/// sub-satellite point, then the south and zenith components are negated,
/// giving north-east-down. Columns of the result are `(v x z, v, z)` with
/// `z = (0, 0, 1)`.
///
/// The radial part of the velocity is dropped before normalizing so the triad
/// stays orthonormal on eccentric orbits; on circular orbits it is zero anyway.
pub fn nadir_to_access(
    body: &CentralBody,
    pos_ecf: &Vector3<f64>,
    vel_ecf: &Vector3<f64>,
) -> Result<Matrix3<f64>> {
    let ssp = body.sub_satellite_point(pos_ecf);
    let mut along = fixed_to_topocentric(vel_ecf, ssp.lat, ssp.lon);
    along.x = -along.x;
    along.z = -along.z;

    let z_hat = Vector3::z();
    let along = (along - z_hat * along.dot(&z_hat))
        .try_normalize(1e-9)
        .ok_or(FootprintError::DegenerateVelocity)?;
    let x_hat = along.cross(&z_hat);

    Ok(Matrix3::from_columns(&[x_hat, along, z_hat]))
}

// ---------------------------------------------------------------------------
// Full chains
// ---------------------------------------------------------------------------

/// Sensor -> spacecraft-access rotation:
/// `(access <- nadir) * (nadir <- body) * (body <- sensor)`.
pub fn sensor_to_access(
    body: &CentralBody,
    body_to_sensor: &Matrix3<f64>,
    nadir_to_body: &Matrix3<f64>,
    pos_ecf: &Vector3<f64>,
    vel_ecf: &Vector3<f64>,
) -> Result<Matrix3<f64>> {
    let access = nadir_to_access(body, pos_ecf, vel_ecf)?;
    Ok(access * nadir_to_body.transpose() * body_to_sensor.transpose())
}

/// Sensor -> Earth-fixed rotation:
/// `(fixed <- nadir) * (nadir <- body) * (body <- sensor)`.
pub fn sensor_to_earth_fixed(
    body_to_sensor: &Matrix3<f64>,
    nadir_to_body: &Matrix3<f64>,
    body_fixed_to_reference: &Matrix3<f64>,
) -> Matrix3<f64> {
    body_fixed_to_reference.transpose() * nadir_to_body.transpose() * body_to_sensor.transpose()
}

/// Rotate sensor-frame headings into the spacecraft-access frame.
///
/// `body_to_sensor` must belong to the sensor that produced `headings`; one
/// sensor per call. Outputs are not re-normalized.
pub fn compose_to_access(
    body: &CentralBody,
    body_to_sensor: &Matrix3<f64>,
    nadir_to_body: &Matrix3<f64>,
    pos_ecf: &Vector3<f64>,
    vel_ecf: &Vector3<f64>,
    headings: &HeadingSet,
) -> Result<HeadingSet> {
    let rot = sensor_to_access(body, body_to_sensor, nadir_to_body, pos_ecf, vel_ecf)?;
    Ok(headings.iter().map(|h| rot * h).collect())
}

/// Rotate sensor-frame headings into the Earth-fixed frame and re-normalize
/// each one. Headings that collapse to zero length are passed through as zero.
pub fn compose_to_earth_fixed(
    body_to_sensor: &Matrix3<f64>,
    nadir_to_body: &Matrix3<f64>,
    body_fixed_to_reference: &Matrix3<f64>,
    headings: &HeadingSet,
) -> HeadingSet {
    let rot = sensor_to_earth_fixed(body_to_sensor, nadir_to_body, body_fixed_to_reference);
    headings
        .iter()
        .map(|h| {
            let v = rot * h;
            v.try_normalize(0.0).unwrap_or(v)
        })
        .collect()
}
