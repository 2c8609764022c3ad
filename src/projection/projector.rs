use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use super::clock_cone::ClockCone;
use crate::body::{wrap_pi, CentralBody, SubSatellitePoint};
use crate::error::ProjectionError;

/// Slack on `sin(cone) / sin(rho)` before a heading counts as past the horizon.
pub const HORIZON_TOLERANCE: f64 = 1e-12;

/// `|cos(lat)|` below this makes the longitude difference indeterminate.
/// Kept above `sqrt(f64::EPSILON)`: `acos` cannot resolve latitudes closer
/// to a pole than ~1.5e-8 rad.
pub const POLAR_EPSILON: f64 = 1e-7;

/// Point on the reference sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundPoint {
    pub lat: f64, // rad, [-pi/2, pi/2]
    pub lon: f64, // rad, (-pi, pi]
}

impl GroundPoint {
    pub fn lat_deg(&self) -> f64 {
        self.lat.to_degrees()
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon.to_degrees()
    }
}

fn clip(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Cone angle of the visible horizon from `altitude` (rad).
pub fn horizon_cone(body: &CentralBody, altitude: f64) -> f64 {
    clip(body.radius / (body.radius + altitude)).asin()
}

/// Intersect a clock/cone heading with the reference sphere.
///
/// Solves the spherical triangle (sub-satellite point, target, north pole).
/// Clock angles in [0, pi) land east of the sub-satellite meridian, the rest
/// west; `phi_e = -clock` turns the clockwise clock angle into the triangle's
/// counter-clockwise azimuth.
pub fn project(
    body: &CentralBody,
    angles: ClockCone,
    ssp: &SubSatellitePoint,
) -> Result<GroundPoint, ProjectionError> {
    let ClockCone { clock, cone } = angles;
    let r = body.radius;
    let lat_ssp = ssp.lat;

    let sin_rho = r / (r + ssp.altitude);
    let ratio = cone.sin() / sin_rho;
    if cone > FRAC_PI_2 || ratio > 1.0 + HORIZON_TOLERANCE {
        return Err(ProjectionError::BeyondHorizon {
            cone,
            horizon: clip(sin_rho).asin(),
        });
    }
    let epsilon = clip(ratio).acos();

    let lambda = FRAC_PI_2 - cone - epsilon;
    let phi_e = -clock;

    let lat_p_prime =
        clip(lambda.cos() * lat_ssp.sin() + lambda.sin() * lat_ssp.cos() * phi_e.cos()).acos();
    let lat_p = FRAC_PI_2 - lat_p_prime;

    let denom = lat_ssp.cos() * lat_p.cos();
    if lat_ssp.cos().abs() < POLAR_EPSILON || lat_p.cos().abs() < POLAR_EPSILON {
        return Err(ProjectionError::IndeterminateLongitude { lat: lat_p });
    }
    let delta_l = clip((lambda.cos() - lat_ssp.sin() * lat_p.sin()) / denom).acos();

    let lon_p = if clock < PI {
        ssp.lon + delta_l
    } else {
        ssp.lon - delta_l
    };

    Ok(GroundPoint {
        lat: lat_p,
        lon: wrap_pi(lon_p),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_3;

    /// Body and altitude with r / (r + H) = 0.9.
    fn sin_rho_point_nine() -> (CentralBody, f64) {
        let body = CentralBody::earth();
        (body, body.radius / 9.0)
    }

    fn ssp(lat: f64, lon: f64, altitude: f64) -> SubSatellitePoint {
        SubSatellitePoint { lat, lon, altitude }
    }

    #[test]
    fn nadir_maps_to_sub_satellite_point() {
        let body = CentralBody::earth();
        let below = ssp(0.6, 2.0, 700_000.0);
        for clock in [0.0, 1.0, 3.0, 5.5] {
            let p = project(&body, ClockCone::new(clock, 0.0), &below).unwrap();
            assert!((p.lat - 0.6).abs() < 1e-9, "lat {} at clock {}", p.lat, clock);
            assert!((p.lon - 2.0).abs() < 1e-7, "lon {} at clock {}", p.lon, clock);
        }
    }

    #[test]
    fn closed_form_equatorial_case() {
        // sin(rho) = 0.9, sin(cone) = 0.45 -> epsilon = pi/3
        let (body, h) = sin_rho_point_nine();
        let cone = 0.45_f64.asin();
        let lambda = FRAC_PI_2 - cone - FRAC_PI_3;
        assert!((lambda - 0.056_833_436_551_002_37).abs() < 1e-12);

        let east = project(&body, ClockCone::new(FRAC_PI_2, cone), &ssp(0.0, 0.0, h)).unwrap();
        assert!(east.lat.abs() < 1e-6);
        assert!((east.lon - 0.056_833_436_551_002_37).abs() < 1e-6, "lon {}", east.lon);

        let north = project(&body, ClockCone::new(0.0, cone), &ssp(0.0, 0.0, h)).unwrap();
        assert!((north.lat - 0.056_833_436_551_002_37).abs() < 1e-6);
        assert!(north.lon.abs() < 1e-6);

        let diag = project(&body, ClockCone::new(PI / 4.0, cone), &ssp(0.0, 0.0, h)).unwrap();
        assert!((diag.lat - 0.040_176_485_051_040_88).abs() < 1e-6, "lat {}", diag.lat);
        assert!((diag.lon - 0.040_208_949_799_901_875).abs() < 1e-6, "lon {}", diag.lon);
    }

    #[test]
    fn clock_symmetry_on_equator() {
        let body = CentralBody::earth();
        let below = ssp(0.0, 1.0, 600_000.0);
        for clock in [0.3, 1.2, 2.0, 2.9] {
            let a = project(&body, ClockCone::new(clock, 0.5), &below).unwrap();
            let b = project(&body, ClockCone::new(2.0 * PI - clock, 0.5), &below).unwrap();
            assert!((a.lat - b.lat).abs() < 1e-12);
            assert!(((a.lon - 1.0) + (b.lon - 1.0)).abs() < 1e-12);
            assert!(a.lon > 1.0 && b.lon < 1.0);
        }
    }

    #[test]
    fn horizon_boundary() {
        let (body, h) = sin_rho_point_nine();
        let below = ssp(0.0, 0.0, h);
        let horizon = horizon_cone(&body, h);
        assert!((horizon - 0.9_f64.asin()).abs() < 1e-12);

        let p = project(&body, ClockCone::new(FRAC_PI_2, horizon), &below).unwrap();
        // epsilon = 0 -> lambda = pi/2 - cone
        assert!(p.lat.abs() < 1e-6);
        assert!((p.lon - (FRAC_PI_2 - horizon)).abs() < 1e-6, "lon {}", p.lon);

        let err = project(&body, ClockCone::new(FRAC_PI_2, horizon + 1e-9), &below).unwrap_err();
        assert!(matches!(err, ProjectionError::BeyondHorizon { .. }));
    }

    #[test]
    fn backward_cone_is_beyond_horizon() {
        let body = CentralBody::earth();
        let err = project(&body, ClockCone::new(0.0, PI - 0.01), &ssp(0.0, 0.0, 700_000.0))
            .unwrap_err();
        assert!(matches!(err, ProjectionError::BeyondHorizon { .. }));
    }

    #[test]
    fn polar_sub_satellite_point_is_indeterminate() {
        let body = CentralBody::earth();
        let err = project(&body, ClockCone::new(1.0, 0.1), &ssp(FRAC_PI_2, 0.0, 700_000.0))
            .unwrap_err();
        match err {
            ProjectionError::IndeterminateLongitude { lat } => assert!(lat < FRAC_PI_2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn target_on_the_pole_is_indeterminate() {
        let body = CentralBody::earth();
        let h = 700_000.0;
        let below = ssp(1.3, 0.5, h);

        // cone whose ground arc reaches exactly from the sub-satellite point to the pole
        let arc = |cone: f64| {
            FRAC_PI_2 - cone - clip(cone.sin() / (body.radius / (body.radius + h))).acos()
        };
        let (mut lo, mut hi) = (0.0, horizon_cone(&body, h));
        for _ in 0..200 {
            let mid = 0.5 * (lo + hi);
            if arc(mid) < FRAC_PI_2 - 1.3 {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let nudges = [
            0.0, 1e-14, -1e-14, 1e-12, -1e-12, 1e-10, -1e-10, 1e-9, -1e-9, 1e-8, -1e-8,
        ];
        for nudge in nudges {
            let result = project(&body, ClockCone::new(0.0, lo + nudge), &below);
            match result {
                Err(ProjectionError::IndeterminateLongitude { lat }) => {
                    assert!((lat - FRAC_PI_2).abs() < 1e-7, "lat {} at nudge {}", lat, nudge)
                }
                other => panic!("nudge {}: unexpected {:?}", nudge, other),
            }
        }

        // well clear of the pole the longitude is defined again
        let p = project(&body, ClockCone::new(0.0, lo - 1e-3), &below).unwrap();
        assert!(p.lat < FRAC_PI_2 - 1e-4);
    }

    #[test]
    fn longitude_wraps_across_antimeridian() {
        let body = CentralBody::earth();
        let below = ssp(0.0, PI - 0.01, 700_000.0);
        let p = project(&body, ClockCone::new(FRAC_PI_2, 0.4), &below).unwrap();
        assert!(p.lon < 0.0 && p.lon > -PI, "lon {}", p.lon);
    }
}
