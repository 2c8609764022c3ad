use nalgebra::{Matrix3, Vector3};

use crate::error::{FootprintError, Result};

// ---------------------------------------------------------------------------
// Elementary frame rotations
// ---------------------------------------------------------------------------

/// Passive rotation by `angle` (rad) about body axis 1, 2 or 3.
/// Returns `None` for any other axis index.
#[rustfmt::skip]
pub fn axis_rotation(axis: u8, angle: f64) -> Option<Matrix3<f64>> {
    let (s, c) = angle.sin_cos();
    match axis {
        1 => Some(Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c,   s,
            0.0, -s,  c,
        )),
        2 => Some(Matrix3::new(
            c,   0.0, -s,
            0.0, 1.0, 0.0,
            s,   0.0, c,
        )),
        3 => Some(Matrix3::new(
            c,   s,   0.0,
            -s,  c,   0.0,
            0.0, 0.0, 1.0,
        )),
        _ => None,
    }
}

/// Frame rotation from three Euler angles (degrees) applied in `sequence`,
/// e.g. `[1, 2, 3]` or `[3, 1, 3]`.
///
/// The first rotation is applied first: `R = R_s3(a3) * R_s2(a2) * R_s1(a1)`.
pub fn euler_rotation(angles_deg: [f64; 3], sequence: [u8; 3]) -> Result<Matrix3<f64>> {
    if sequence[0] == sequence[1] || sequence[1] == sequence[2] {
        return Err(FootprintError::InvalidEulerSequence(sequence));
    }
    let mut rot = Matrix3::identity();
    for (&axis, &angle) in sequence.iter().zip(angles_deg.iter()) {
        let step = axis_rotation(axis, angle.to_radians())
            .ok_or(FootprintError::InvalidEulerSequence(sequence))?;
        rot = step * rot;
    }
    Ok(rot)
}

// ---------------------------------------------------------------------------
// Nadir-pointing reference frame
// ---------------------------------------------------------------------------

/// Body-fixed -> nadir reference rotation for a nadir-pointing spacecraft.
///
/// Rows: z points at the body centre, y along the negative orbit normal,
/// x = y x z (roughly along track).
pub fn body_fixed_to_nadir(pos: &Vector3<f64>, vel: &Vector3<f64>) -> Result<Matrix3<f64>> {
    let z = -pos.try_normalize(f64::EPSILON).ok_or(FootprintError::DegenerateVelocity)?;
    let y = -pos
        .cross(vel)
        .try_normalize(f64::EPSILON)
        .ok_or(FootprintError::DegenerateVelocity)?;
    let x = y.cross(&z);
    Ok(Matrix3::from_rows(&[x.transpose(), y.transpose(), z.transpose()]))
}

/// True when `m` is orthonormal to within `tol`.
pub fn is_orthonormal(m: &Matrix3<f64>, tol: f64) -> bool {
    (m * m.transpose() - Matrix3::identity()).amax() < tol
}
