use nalgebra::{Matrix3, Vector3};

use crate::error::Result;
use crate::frames::{body_fixed_to_nadir, euler_rotation};

// ---------------------------------------------------------------------------
// Spacecraft state at one instant
// ---------------------------------------------------------------------------

/// Earth-fixed state plus attitude, as consumed by the footprint pipeline.
#[derive(Debug, Clone)]
pub struct SpacecraftState {
    pub pos: Vector3<f64>,           // m, Earth-fixed
    pub vel: Vector3<f64>,           // m/s, Earth-fixed
    pub nadir_to_body: Matrix3<f64>, // attitude relative to the nadir frame
    pub body_fixed_to_reference: Option<Matrix3<f64>>, // pole path only
}

impl SpacecraftState {
    /// Nadir-aligned body, no reference frame attached.
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>) -> Self {
        Self {
            pos,
            vel,
            nadir_to_body: Matrix3::identity(),
            body_fixed_to_reference: None,
        }
    }

    /// Nadir-pointing attitude with the body-fixed -> nadir reference frame
    /// derived from the state itself.
    pub fn nadir_pointing(pos: Vector3<f64>, vel: Vector3<f64>) -> Result<Self> {
        let reference = body_fixed_to_nadir(&pos, &vel)?;
        Ok(Self::new(pos, vel).with_reference(reference))
    }

    pub fn with_reference(mut self, body_fixed_to_reference: Matrix3<f64>) -> Self {
        self.body_fixed_to_reference = Some(body_fixed_to_reference);
        self
    }

    /// Body offset from nadir as Euler angles (deg) in `sequence`.
    pub fn with_nadir_offset(mut self, angles_deg: [f64; 3], sequence: [u8; 3]) -> Result<Self> {
        self.nadir_to_body = euler_rotation(angles_deg, sequence)?;
        Ok(self)
    }

    /// Same state with the body yawed 180 deg about the nadir axis.
    pub fn yawed_180(&self) -> Result<Self> {
        self.clone().with_nadir_offset([0.0, 0.0, 180.0], [1, 2, 3])
    }
}
