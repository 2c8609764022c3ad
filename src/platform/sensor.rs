use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::{Matrix3, Vector3};

use crate::error::{FootprintError, Result};
use crate::frames::{euler_rotation, HeadingSet};
use crate::projection::ClockCone;

// ---------------------------------------------------------------------------
// Sensor definition (one field of view, three heading sets)
// ---------------------------------------------------------------------------

/// One sensor's field of view, expressed in the sensor frame (+z boresight).
#[derive(Debug, Clone)]
pub struct Sensor {
    pub name: String,
    pub body_to_sensor: Matrix3<f64>,
    pub interior: HeadingSet, // boresight + boresight/corner bisectors
    pub corners: HeadingSet,  // boundary headings, in order around the boresight
    pub poles: HeadingSet,    // unit normals of the boundary edge great circles
}

impl Sensor {
    /// Circular field of view sampled at `boundary_samples` evenly spaced clocks.
    pub fn conical(half_angle: f64, boundary_samples: usize) -> Result<Self> {
        SensorBuilder::new("conical")
            .conical(half_angle, boundary_samples)
            .build()
    }

    /// Polygonal field of view from paired boundary cone/clock angles (rad).
    pub fn custom(cone: &[f64], clock: &[f64]) -> Result<Self> {
        SensorBuilder::new("custom").boundary(cone, clock).build()
    }

    pub fn boresight(&self) -> Vector3<f64> {
        self.body_to_sensor.transpose() * Vector3::z()
    }
}

// ---------------------------------------------------------------------------
// Heading derivation
// ---------------------------------------------------------------------------

fn edge_poles(corners: &HeadingSet) -> Result<HeadingSet> {
    let c = corners.as_slice();
    (0..c.len())
        .map(|i| {
            let j = (i + 1) % c.len();
            c[i].cross(&c[j]).try_normalize(1e-12).ok_or_else(|| {
                FootprintError::InvalidSensor(format!("corners {} and {} coincide", i, j))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(HeadingSet::new)
}

fn interior_headings(corners: &HeadingSet) -> HeadingSet {
    let boresight = Vector3::z();
    std::iter::once(boresight)
        .chain(corners.iter().map(|c| (boresight + c).normalize()))
        .collect()
}

// ---------------------------------------------------------------------------
// Sensor builder
// ---------------------------------------------------------------------------

enum Shape {
    Conical { half_angle: f64, samples: usize },
    Boundary { cone: Vec<f64>, clock: Vec<f64> },
}

pub struct SensorBuilder {
    name: String,
    shape: Option<Shape>,
    offset: Option<([f64; 3], [u8; 3])>,
}

impl SensorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), shape: None, offset: None }
    }

    pub fn conical(mut self, half_angle: f64, boundary_samples: usize) -> Self {
        self.shape = Some(Shape::Conical { half_angle, samples: boundary_samples });
        self
    }

    pub fn boundary(mut self, cone: &[f64], clock: &[f64]) -> Self {
        self.shape = Some(Shape::Boundary { cone: cone.to_vec(), clock: clock.to_vec() });
        self
    }

    /// Sensor mounting as Euler angles (deg) in `sequence`, body -> sensor.
    pub fn body_offset(mut self, angles_deg: [f64; 3], sequence: [u8; 3]) -> Self {
        self.offset = Some((angles_deg, sequence));
        self
    }

    pub fn build(self) -> Result<Sensor> {
        let boundary: Vec<ClockCone> = match self.shape {
            Some(Shape::Conical { half_angle, samples }) => {
                if !(half_angle > 0.0 && half_angle < FRAC_PI_2) {
                    return Err(FootprintError::InvalidSensor(format!(
                        "half angle {} rad outside (0, pi/2)",
                        half_angle
                    )));
                }
                if samples < 3 {
                    return Err(FootprintError::InvalidSensor(
                        "conical sensor needs at least 3 boundary samples".into(),
                    ));
                }
                (0..samples)
                    .map(|i| ClockCone::new(TAU * i as f64 / samples as f64, half_angle))
                    .collect::<Vec<_>>()
            }
            Some(Shape::Boundary { cone, clock }) => {
                if cone.len() != clock.len() {
                    return Err(FootprintError::InvalidSensor(format!(
                        "{} cone angles but {} clock angles",
                        cone.len(),
                        clock.len()
                    )));
                }
                if cone.len() < 3 {
                    return Err(FootprintError::InvalidSensor(
                        "boundary needs at least 3 cone/clock pairs".into(),
                    ));
                }
                if let Some(bad) = cone.iter().find(|c| !(**c > 0.0 && **c <= FRAC_PI_2)) {
                    return Err(FootprintError::InvalidSensor(format!(
                        "cone angle {} rad outside (0, pi/2]",
                        bad
                    )));
                }
                cone.iter()
                    .zip(&clock)
                    .map(|(&cone, &clock)| ClockCone::new(clock, cone))
                    .collect()
            }
            None => {
                return Err(FootprintError::InvalidSensor(format!(
                    "sensor '{}' has no field of view",
                    self.name
                )))
            }
        };

        let body_to_sensor = match self.offset {
            Some((angles, sequence)) => euler_rotation(angles, sequence)?,
            None => Matrix3::identity(),
        };

        let corners = HeadingSet::from_clock_cone(&boundary);
        let poles = edge_poles(&corners)?;
        let interior = interior_headings(&corners);

        Ok(Sensor {
            name: self.name,
            body_to_sensor,
            interior,
            corners,
            poles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::to_clock_cone;

    #[test]
    fn conical_heading_counts() {
        let s = Sensor::conical(0.3, 8).unwrap();
        assert_eq!(s.corners.len(), 8);
        assert_eq!(s.poles.len(), 8);
        assert_eq!(s.interior.len(), 9);
        for c in &s.corners {
            assert!((to_clock_cone(c).cone - 0.3).abs() < 1e-12);
        }
    }

    #[test]
    fn poles_are_unit_and_face_the_boresight() {
        let s = Sensor::conical(0.4, 6).unwrap();
        for p in &s.poles {
            assert!((p.norm() - 1.0).abs() < 1e-12);
            // counter-clockwise corners put every edge pole on the boresight side
            assert!(p.dot(&Vector3::z()) > 0.0);
        }
    }

    #[test]
    fn custom_rectangular_sensor() {
        let cone = [0.2, 0.2, 0.2, 0.2];
        let clock = [0.5, 2.6, 3.7, 5.8];
        let s = Sensor::custom(&cone, &clock).unwrap();
        assert_eq!(s.corners.len(), 4);
        assert!((s.interior.as_slice()[0] - Vector3::z()).norm() < 1e-15);
    }

    #[test]
    fn rejects_malformed_boundaries() {
        assert!(Sensor::custom(&[0.2, 0.2], &[0.0, 1.0]).is_err());
        assert!(Sensor::custom(&[0.2, 0.2, 0.2], &[0.0, 1.0]).is_err());
        assert!(Sensor::custom(&[0.2, 0.2, 2.0], &[0.0, 1.0, 2.0]).is_err());
        assert!(Sensor::custom(&[0.2, 0.2, 0.3], &[0.0, 0.0, 2.0]).is_err());
        assert!(Sensor::conical(0.0, 8).is_err());
        assert!(Sensor::conical(0.3, 2).is_err());
        assert!(SensorBuilder::new("empty").build().is_err());
    }

    #[test]
    fn body_offset_tilts_boresight() {
        let s = SensorBuilder::new("tilted")
            .conical(0.1, 4)
            .body_offset([30.0, 0.0, 0.0], [1, 2, 3])
            .build()
            .unwrap();
        let b = s.boresight();
        assert!((b.z - 30_f64.to_radians().cos()).abs() < 1e-12, "boresight {:?}", b);
    }
}
