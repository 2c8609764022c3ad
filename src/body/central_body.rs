use std::f64::consts::{PI, TAU};

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const R_EARTH: f64 = 6_378_136.3;                 // reference sphere radius, m
pub const OMEGA_EARTH: f64 = 7.292_115_855_306_665e-5; // sidereal rate of gmst(), rad/s
pub const MU_EARTH: f64 = 3.986_004_418e14;           // m^3/s^2
pub const JD_J2000: f64 = 2_451_545.0;

// ---------------------------------------------------------------------------
// Sub-satellite point
// ---------------------------------------------------------------------------

/// Spacecraft position over the reference sphere at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubSatellitePoint {
    pub lat: f64,      // rad
    pub lon: f64,      // rad, [0, 2pi)
    pub altitude: f64, // m above the sphere
}

// ---------------------------------------------------------------------------
// Central body model
// ---------------------------------------------------------------------------

/// Spherical central body. Built once by the caller and borrowed by every
/// footprint operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    pub radius: f64,        // m
    pub rotation_rate: f64, // rad/s
    pub mu: f64,            // m^3/s^2
}

impl Default for CentralBody {
    fn default() -> Self {
        Self::earth()
    }
}

impl CentralBody {
    pub fn earth() -> Self {
        Self {
            radius: R_EARTH,
            rotation_rate: OMEGA_EARTH,
            mu: MU_EARTH,
        }
    }

    /// Latitude, longitude and altitude of the point directly below `pos_ecf`.
    pub fn sub_satellite_point(&self, pos_ecf: &Vector3<f64>) -> SubSatellitePoint {
        let (lat, lon, altitude) = cartesian_to_spherical(pos_ecf, self.radius);
        SubSatellitePoint { lat, lon, altitude }
    }

    /// Body rotation angle at `jd`, anchored to the J2000 sidereal angle and
    /// advanced at `rotation_rate`. Equals `gmst(jd)` for the Earth model.
    pub fn rotation_angle(&self, jd: f64) -> f64 {
        let elapsed = (jd - JD_J2000) * 86_400.0; // s
        wrap_two_pi(gmst(JD_J2000) + self.rotation_rate * elapsed)
    }

    /// Rotate an inertial state into the body-fixed frame at `jd` (UT1).
    ///
    /// Velocity is rotated but the omega x r transport term is not added: the
    /// access frame only needs the direction of travel over the inertial orbit.
    pub fn inertial_to_fixed(
        &self,
        pos_eci: &Vector3<f64>,
        vel_eci: &Vector3<f64>,
        jd: f64,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let rot = inertial_to_fixed_matrix(self.rotation_angle(jd));
        (rot * pos_eci, rot * vel_eci)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Cartesian vector to (latitude, longitude, height above `radius`).
/// Longitude is in [0, 2pi). A zero vector maps to (0, 0, -radius).
pub fn cartesian_to_spherical(v: &Vector3<f64>, radius: f64) -> (f64, f64, f64) {
    let r = v.norm();
    if r == 0.0 {
        return (0.0, 0.0, -radius);
    }
    // atan2 keeps full precision near the poles, where asin does not
    let lat = v.z.atan2(v.x.hypot(v.y));
    let lon = wrap_two_pi(v.y.atan2(v.x));
    (lat, lon, r - radius)
}

pub fn spherical_to_cartesian(lat: f64, lon: f64, radius: f64) -> Vector3<f64> {
    Vector3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
    )
}

/// Body-fixed to topocentric south-east-zenith rotation at (lat, lon).
#[rustfmt::skip]
pub fn fixed_to_topocentric_matrix(lat: f64, lon: f64) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    Matrix3::new(
        sin_lat * cos_lon, sin_lat * sin_lon, -cos_lat,
        -sin_lon,          cos_lon,           0.0,
        cos_lat * cos_lon, cos_lat * sin_lon, sin_lat,
    )
}

/// Express a body-fixed vector in SEZ components at (lat, lon).
pub fn fixed_to_topocentric(v: &Vector3<f64>, lat: f64, lon: f64) -> Vector3<f64> {
    fixed_to_topocentric_matrix(lat, lon) * v
}

pub fn topocentric_to_fixed(v: &Vector3<f64>, lat: f64, lon: f64) -> Vector3<f64> {
    fixed_to_topocentric_matrix(lat, lon).transpose() * v
}

/// Greenwich mean sidereal angle (rad) for a UT1 Julian date.
pub fn gmst(jd: f64) -> f64 {
    let deg = 280.460_618_37 + 360.985_647_366_29 * (jd - JD_J2000);
    wrap_two_pi(deg.to_radians())
}

/// Passive rotation about z by the sidereal angle: ECI -> body-fixed.
#[rustfmt::skip]
pub fn inertial_to_fixed_matrix(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c,   s,   0.0,
        -s,  c,   0.0,
        0.0, 0.0, 1.0,
    )
}

// ---------------------------------------------------------------------------
// Angle wrapping
// ---------------------------------------------------------------------------

/// Wrap into [0, 2pi).
pub fn wrap_two_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Wrap into (-pi, pi].
pub fn wrap_pi(angle: f64) -> f64 {
    let a = wrap_two_pi(angle);
    if a > PI { a - TAU } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn spherical_roundtrip() {
        let lat = 0.3;
        let lon = 4.0;
        let v = spherical_to_cartesian(lat, lon, R_EARTH + 700_000.0);
        let (lat2, lon2, h) = cartesian_to_spherical(&v, R_EARTH);
        assert!((lat2 - lat).abs() < 1e-12);
        assert!((lon2 - lon).abs() < 1e-12);
        assert!((h - 700_000.0).abs() < 1e-6, "height mismatch: {}", h);
    }

    #[test]
    fn latitude_resolves_near_the_pole() {
        // 1e-9 rad off the pole; asin(z / r) would round this to exactly pi/2
        let v = spherical_to_cartesian(FRAC_PI_2 - 1e-9, 0.3, R_EARTH);
        let (lat, _, _) = cartesian_to_spherical(&v, R_EARTH);
        assert!(((FRAC_PI_2 - lat) - 1e-9).abs() < 1e-14, "lat {}", lat);
    }

    #[test]
    fn longitude_is_non_negative() {
        let (_, lon, _) = cartesian_to_spherical(&Vector3::new(0.0, -1.0, 0.0), 1.0);
        assert!((lon - 1.5 * PI).abs() < 1e-12, "got {}", lon);
    }

    #[test]
    fn topocentric_axes_at_equator() {
        // At (0, 0): south = -z, east = +y, zenith = +x
        let east = fixed_to_topocentric(&Vector3::new(0.0, 1.0, 0.0), 0.0, 0.0);
        assert!((east - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
        let north = fixed_to_topocentric(&Vector3::new(0.0, 0.0, 1.0), 0.0, 0.0);
        assert!((north - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
        let up = fixed_to_topocentric(&Vector3::new(1.0, 0.0, 0.0), 0.0, 0.0);
        assert!((up - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn topocentric_roundtrip() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        let back = topocentric_to_fixed(&fixed_to_topocentric(&v, 0.7, 2.1), 0.7, 2.1);
        assert!((back - v).norm() < 1e-12);
    }

    #[test]
    fn gmst_at_j2000() {
        let theta = gmst(JD_J2000);
        assert!((theta - 280.460_618_37_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn earth_rotation_angle_tracks_gmst() {
        let body = CentralBody::earth();
        for jd in [JD_J2000 - 3_000.5, JD_J2000 + 0.3, 2_458_849.5] {
            let d = wrap_pi(body.rotation_angle(jd) - gmst(jd));
            assert!(d.abs() < 1e-8, "jd {} off by {}", jd, d);
        }
    }

    #[test]
    fn inertial_to_fixed_preserves_radius() {
        let body = CentralBody::earth();
        let pos = Vector3::new(7_000_000.0, 100.0, -3_000.0);
        let vel = Vector3::new(0.0, 7_500.0, 10.0);
        let (p, v) = body.inertial_to_fixed(&pos, &vel, JD_J2000 + 0.25);
        assert!((p.norm() - pos.norm()).abs() < 1e-6);
        assert!((v.norm() - vel.norm()).abs() < 1e-9);
        assert!((p.z - pos.z).abs() < 1e-9);
    }

    #[test]
    fn wrap_pi_range() {
        assert!((wrap_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap_pi(PI) - PI).abs() < 1e-12);
        assert!((wrap_pi(-PI) - PI).abs() < 1e-12);
        assert!(wrap_two_pi(-1e-20) < TAU);
    }
}
