use nalgebra::Matrix3;
use tracing::debug;

use crate::body::{CentralBody, SubSatellitePoint};
use crate::error::{FootprintError, ProjectionError, Result};
use crate::frames::{compose_to_access, compose_to_earth_fixed, HeadingSet};
use crate::platform::{Sensor, SpacecraftState};
use crate::projection::{project, to_clock_cone_batch, GroundPoint};

/// Outcome for a single heading.
pub type Projection = std::result::Result<GroundPoint, ProjectionError>;

/// All three heading sets of one sensor, resolved at one instant.
#[derive(Debug, Clone)]
pub struct Footprint {
    pub sub_satellite: SubSatellitePoint,
    pub interior: Vec<Projection>,
    pub corners: Vec<Projection>,
    pub poles: HeadingSet, // Earth-fixed unit vectors
}

impl Footprint {
    /// Interior ground points that actually hit the sphere.
    pub fn interior_points(&self) -> impl Iterator<Item = GroundPoint> + '_ {
        self.interior.iter().filter_map(|p| p.ok())
    }

    /// Corner ground points that actually hit the sphere, in boundary order.
    pub fn corner_points(&self) -> impl Iterator<Item = GroundPoint> + '_ {
        self.corners.iter().filter_map(|p| p.ok())
    }

    pub fn rejected(&self) -> usize {
        self.interior
            .iter()
            .chain(self.corners.iter())
            .filter(|p| p.is_err())
            .count()
    }
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Projects one sensor's headings onto the central body.
///
/// Holds nothing but a borrow of the body model; spacecraft and sensor are
/// borrowed per call, and every call recomputes the sub-satellite point and
/// all rotations. Handles one sensor per call: multi-sensor footprints are
/// merged by the caller.
#[derive(Debug, Clone, Copy)]
pub struct FootprintExtractor<'a> {
    body: &'a CentralBody,
}

impl<'a> FootprintExtractor<'a> {
    pub fn new(body: &'a CentralBody) -> Self {
        Self { body }
    }

    /// Ground point for each interior heading.
    pub fn interior_intersection(
        &self,
        sc: &SpacecraftState,
        sensor: &Sensor,
    ) -> Result<Vec<Projection>> {
        debug!(sensor = %sensor.name, headings = sensor.interior.len(), "interior intersection");
        self.project_headings(sc, &sensor.body_to_sensor, &sensor.interior)
    }

    /// Ground point for each boundary corner heading (footprint polygon).
    pub fn corner_intersection(
        &self,
        sc: &SpacecraftState,
        sensor: &Sensor,
    ) -> Result<Vec<Projection>> {
        debug!(sensor = %sensor.name, headings = sensor.corners.len(), "corner intersection");
        self.project_headings(sc, &sensor.body_to_sensor, &sensor.corners)
    }

    /// Pole headings rotated to Earth-fixed and re-normalized. Poles describe
    /// the footprint's shape, so they are not projected onto the surface.
    pub fn pole_intersection(&self, sc: &SpacecraftState, sensor: &Sensor) -> Result<HeadingSet> {
        let reference = sc
            .body_fixed_to_reference
            .as_ref()
            .ok_or(FootprintError::MissingReferenceFrame)?;
        debug!(sensor = %sensor.name, headings = sensor.poles.len(), "pole intersection");
        Ok(compose_to_earth_fixed(
            &sensor.body_to_sensor,
            &sc.nadir_to_body,
            reference,
            &sensor.poles,
        ))
    }

    /// Interior, corner and pole results in one pass.
    pub fn extract(&self, sc: &SpacecraftState, sensor: &Sensor) -> Result<Footprint> {
        Ok(Footprint {
            sub_satellite: self.body.sub_satellite_point(&sc.pos),
            interior: self.interior_intersection(sc, sensor)?,
            corners: self.corner_intersection(sc, sensor)?,
            poles: self.pole_intersection(sc, sensor)?,
        })
    }

    fn project_headings(
        &self,
        sc: &SpacecraftState,
        body_to_sensor: &Matrix3<f64>,
        headings: &HeadingSet,
    ) -> Result<Vec<Projection>> {
        let ssp = self.body.sub_satellite_point(&sc.pos);
        let access = compose_to_access(
            self.body,
            body_to_sensor,
            &sc.nadir_to_body,
            &sc.pos,
            &sc.vel,
            headings,
        )?;
        let projected: Vec<Projection> = to_clock_cone_batch(&access)
            .into_iter()
            .map(|cc| project(self.body, cc, &ssp))
            .collect();
        debug!(
            lat = ssp.lat,
            lon = ssp.lon,
            altitude = ssp.altitude,
            rejected = projected.iter().filter(|p| p.is_err()).count(),
            "projected headings"
        );
        Ok(projected)
    }
}
