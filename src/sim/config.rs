use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::body::{CentralBody, R_EARTH};
use crate::error::{FootprintError, Result};
use crate::orbital::KeplerianElements;
use crate::platform::{Sensor, SensorBuilder};

// ---------------------------------------------------------------------------
// Orbit
// ---------------------------------------------------------------------------

/// Initial orbit; angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    pub sma: f64, // m
    pub ecc: f64,
    pub inc_deg: f64,
    pub raan_deg: f64,
    pub argp_deg: f64,
    pub true_anom_deg: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            sma: R_EARTH + 700_000.0, // 700 km sun-synchronous
            ecc: 0.0,
            inc_deg: 98.19,
            raan_deg: 0.0,
            argp_deg: 0.0,
            true_anom_deg: 0.0,
        }
    }
}

impl OrbitConfig {
    pub fn elements(&self) -> KeplerianElements {
        KeplerianElements::from_degrees(
            self.sma,
            self.ecc,
            self.inc_deg,
            self.raan_deg,
            self.argp_deg,
            self.true_anom_deg,
        )
    }
}

// ---------------------------------------------------------------------------
// Sensor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SensorShape {
    Conical { half_angle_deg: f64, boundary_samples: usize },
    Custom { cone_deg: Vec<f64>, clock_deg: Vec<f64> },
}

/// Euler angles (deg) and axis sequence, e.g. `[1, 2, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerOffset {
    pub angles_deg: [f64; 3],
    pub sequence: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub name: String,
    #[serde(flatten)]
    pub shape: SensorShape,
    #[serde(default)]
    pub body_offset: Option<EulerOffset>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            name: "imager".into(),
            shape: SensorShape::Conical { half_angle_deg: 30.0, boundary_samples: 12 },
            body_offset: None,
        }
    }
}

impl SensorConfig {
    pub fn build(&self) -> Result<Sensor> {
        let mut builder = SensorBuilder::new(self.name.clone());
        builder = match &self.shape {
            SensorShape::Conical { half_angle_deg, boundary_samples } => {
                builder.conical(half_angle_deg.to_radians(), *boundary_samples)
            }
            SensorShape::Custom { cone_deg, clock_deg } => {
                let cone: Vec<f64> = cone_deg.iter().map(|a| a.to_radians()).collect();
                let clock: Vec<f64> = clock_deg.iter().map(|a| a.to_radians()).collect();
                builder.boundary(&cone, &clock)
            }
        };
        if let Some(offset) = self.body_offset {
            builder = builder.body_offset(offset.angles_deg, offset.sequence);
        }
        builder.build()
    }
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub name: String,
    pub epoch_jd: f64, // UT1 Julian date
    pub orbit: OrbitConfig,
    pub sensor: SensorConfig,
    pub step: f64,     // s
    pub duration: f64, // s
    pub yaw180: bool,  // also cover with the body yawed 180 deg
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: "default-pass".into(),
            epoch_jd: 2_458_849.5, // 2020-01-01 00:00 UT1
            orbit: OrbitConfig::default(),
            sensor: SensorConfig::default(),
            step: 60.0,
            duration: 6_000.0, // ~one orbit
            yaw180: false,
        }
    }
}

impl RunConfig {
    /// Load from a JSON file and check the body-independent settings.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and check the body-independent settings; the orbit is checked
    /// against the central body by [`RunConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.check_settings()?;
        Ok(config)
    }

    /// Step, duration, eccentricity and sensor checks.
    pub fn check_settings(&self) -> Result<()> {
        if !(self.step > 0.0) {
            return Err(FootprintError::Config(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if !(self.duration > 0.0) {
            return Err(FootprintError::Config(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        if !(0.0..1.0).contains(&self.orbit.ecc) {
            return Err(FootprintError::Config(format!(
                "eccentricity {} outside [0, 1)",
                self.orbit.ecc
            )));
        }
        self.sensor.build().map(|_| ())
    }

    /// Full check against the body the pass will run over.
    pub fn validate(&self, body: &CentralBody) -> Result<()> {
        self.check_settings()?;
        let perigee = self.orbit.sma * (1.0 - self.orbit.ecc);
        if perigee <= body.radius {
            return Err(FootprintError::Config(format!(
                "perigee radius {:.0} m is inside the central body (radius {:.0} m)",
                perigee, body.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mars() -> CentralBody {
        CentralBody {
            radius: 3_389_500.0,
            rotation_rate: 7.088_218e-5,
            mu: 4.282_837e13,
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(RunConfig::default().validate(&CentralBody::earth()).is_ok());
    }

    #[test]
    fn perigee_is_checked_against_the_given_body() {
        let mut config = RunConfig::default();
        config.orbit.sma = 3_389_500.0 + 400_000.0;
        assert!(config.validate(&mars()).is_ok());
        let err = config.validate(&CentralBody::earth()).unwrap_err();
        assert!(matches!(err, FootprintError::Config(_)));
    }

    #[test]
    fn loading_does_not_assume_a_body() {
        let json = r#"{ "orbit": { "sma": 3789500.0, "ecc": 0.0, "inc_deg": 25.0,
            "raan_deg": 0.0, "argp_deg": 0.0, "true_anom_deg": 0.0 } }"#;
        let config = RunConfig::from_json(json).unwrap();
        assert_eq!(config.orbit.sma, 3_789_500.0);
    }

    #[test]
    fn parses_custom_sensor() {
        let json = r#"{
            "name": "rect",
            "step": 30.0,
            "sensor": {
                "name": "rect",
                "type": "custom",
                "cone_deg": [10.0, 10.0, 10.0, 10.0],
                "clock_deg": [45.0, 135.0, 225.0, 315.0],
                "body_offset": { "angles_deg": [0.0, 0.0, 0.0], "sequence": [1, 2, 3] }
            }
        }"#;
        let config = RunConfig::from_json(json).unwrap();
        assert_eq!(config.step, 30.0);
        assert_eq!(config.duration, RunConfig::default().duration);
        let sensor = config.sensor.build().unwrap();
        assert_eq!(sensor.corners.len(), 4);
    }

    #[test]
    fn rejects_bad_values() {
        let earth = CentralBody::earth();
        let mut config = RunConfig::default();
        config.step = 0.0;
        assert!(config.validate(&earth).is_err());

        let mut config = RunConfig::default();
        config.orbit.sma = 6_000_000.0;
        assert!(config.validate(&earth).is_err());

        let mut config = RunConfig::default();
        config.sensor.shape = SensorShape::Conical { half_angle_deg: 95.0, boundary_samples: 8 };
        assert!(config.check_settings().is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = RunConfig::from_json("{ \"step\": ").unwrap_err();
        assert!(matches!(err, FootprintError::Json(_)));
    }
}
