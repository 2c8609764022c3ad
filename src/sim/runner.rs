use serde::Serialize;
use tracing::{info, warn};

use super::config::RunConfig;
use crate::body::{CentralBody, SubSatellitePoint};
use crate::error::Result;
use crate::footprint::{Footprint, FootprintExtractor};
use crate::orbital::{propagate_orbit, OrbitState};
use crate::platform::{Sensor, SpacecraftState};
use crate::projection::GroundPoint;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Footprint of the configured sensor at one time step. Headings that did not
/// reach the ground are dropped and counted in `rejected`.
#[derive(Debug, Clone, Serialize)]
pub struct FootprintSample {
    pub time: f64, // s since epoch
    pub sub_satellite: SubSatellitePoint,
    pub interior: Vec<GroundPoint>,
    pub corners: Vec<GroundPoint>,
    pub poles: Vec<[f64; 3]>, // Earth-fixed unit vectors
    pub rejected: usize,
}

impl FootprintSample {
    fn new(time: f64, footprint: &Footprint) -> Self {
        let mut sample = FootprintSample {
            time,
            sub_satellite: footprint.sub_satellite,
            interior: vec![],
            corners: vec![],
            poles: vec![],
            rejected: 0,
        };
        sample.merge(footprint);
        sample
    }

    /// Append another sensor pass at the same instant.
    fn merge(&mut self, footprint: &Footprint) {
        self.interior.extend(footprint.interior_points());
        self.corners.extend(footprint.corner_points());
        self.poles.extend(footprint.poles.iter().map(|p| [p.x, p.y, p.z]));
        self.rejected += footprint.rejected();
    }
}

/// Footprint of `sensor` on `sc`, plus the yaw-flipped footprint when asked.
pub fn sample_at(
    extractor: &FootprintExtractor<'_>,
    sc: &SpacecraftState,
    sensor: &Sensor,
    time: f64,
    yaw180: bool,
) -> Result<FootprintSample> {
    let mut sample = FootprintSample::new(time, &extractor.extract(sc, sensor)?);
    if yaw180 {
        let flipped = sc.yawed_180()?;
        sample.merge(&extractor.extract(&flipped, sensor)?);
    }
    Ok(sample)
}

// ---------------------------------------------------------------------------
// Pass simulation
// ---------------------------------------------------------------------------

/// Propagate the configured orbit and compute the sensor footprint at every
/// step, in the body-fixed frame of `body`.
pub fn run_pass(config: &RunConfig, body: &CentralBody) -> Result<Vec<FootprintSample>> {
    config.validate(body)?;
    let sensor = config.sensor.build()?;
    let extractor = FootprintExtractor::new(body);

    let (pos, vel) = config.orbit.elements().to_state_vector(body.mu);
    let initial = OrbitState { time: 0.0, pos, vel };
    let trajectory = propagate_orbit(&initial, config.step, config.duration, body.mu);
    info!(
        run = %config.name,
        sensor = %sensor.name,
        steps = trajectory.len(),
        "propagated orbit"
    );

    let mut samples = Vec::with_capacity(trajectory.len());
    for state in &trajectory {
        let jd = config.epoch_jd + state.time / SECONDS_PER_DAY;
        let (pos_ecf, vel_ecf) = body.inertial_to_fixed(&state.pos, &state.vel, jd);
        let sc = SpacecraftState::nadir_pointing(pos_ecf, vel_ecf)?;

        let sample = sample_at(&extractor, &sc, &sensor, state.time, config.yaw180)?;
        if sample.rejected > 0 {
            warn!(
                time = state.time,
                rejected = sample.rejected,
                "headings without ground intersection"
            );
        }
        samples.push(sample);
    }

    Ok(samples)
}
