use std::f64::consts::PI;

use nalgebra::{Matrix3, Vector3};

use crate::frames::rotation::axis_rotation;

/// Classical Keplerian orbital elements (angles in rad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerianElements {
    pub sma: f64,       // semi-major axis, m
    pub ecc: f64,       // eccentricity
    pub inc: f64,       // inclination
    pub raan: f64,      // right ascension of ascending node
    pub argp: f64,      // argument of periapsis
    pub true_anom: f64, // true anomaly
}

impl KeplerianElements {
    /// Build from angles given in degrees.
    pub fn from_degrees(
        sma: f64,
        ecc: f64,
        inc: f64,
        raan: f64,
        argp: f64,
        true_anom: f64,
    ) -> Self {
        Self {
            sma,
            ecc,
            inc: inc.to_radians(),
            raan: raan.to_radians(),
            argp: argp.to_radians(),
            true_anom: true_anom.to_radians(),
        }
    }

    /// Perifocal (PQW) -> ECI rotation.
    pub fn pqw_to_eci(&self) -> Matrix3<f64> {
        // Passive 3-1-3 sequence ECI -> PQW, transposed
        let eci_to_pqw = rot(3, self.argp) * rot(1, self.inc) * rot(3, self.raan);
        eci_to_pqw.transpose()
    }

    /// ECI position (m) and velocity (m/s) for gravitational parameter `mu`.
    pub fn to_state_vector(&self, mu: f64) -> (Vector3<f64>, Vector3<f64>) {
        let p = self.sma * (1.0 - self.ecc * self.ecc); // semi-latus rectum
        let (sin_nu, cos_nu) = self.true_anom.sin_cos();
        let r = p / (1.0 + self.ecc * cos_nu);

        let pos_pqw = Vector3::new(r * cos_nu, r * sin_nu, 0.0);
        let vel_pqw = (mu / p).sqrt() * Vector3::new(-sin_nu, self.ecc + cos_nu, 0.0);

        let rot = self.pqw_to_eci();
        (rot * pos_pqw, rot * vel_pqw)
    }

    pub fn period(&self, mu: f64) -> f64 {
        2.0 * PI * (self.sma.powi(3) / mu).sqrt()
    }
}

fn rot(axis: u8, angle: f64) -> Matrix3<f64> {
    // axes 1 and 3 are always valid
    axis_rotation(axis, angle).unwrap_or_else(Matrix3::identity)
}
