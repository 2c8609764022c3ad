use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{FootprintSample, RunConfig};

/// Summary statistics computed from a footprint pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassSummary {
    pub run: String,
    pub sensor: String,
    pub samples: usize,
    pub interior_points: usize,
    pub corner_points: usize,
    pub pole_vectors: usize,
    pub rejected_headings: usize,
    pub lat_min_deg: f64,
    pub lat_max_deg: f64,
    pub lon_min_deg: f64,
    pub lon_max_deg: f64,
}

impl PassSummary {
    /// Compute summary from footprint samples. Extents cover ground points only.
    pub fn from_samples(config: &RunConfig, samples: &[FootprintSample]) -> Self {
        let points = samples
            .iter()
            .flat_map(|s| s.interior.iter().chain(s.corners.iter()));

        let (mut lat_min, mut lat_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut lon_min, mut lon_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            lat_min = lat_min.min(p.lat_deg());
            lat_max = lat_max.max(p.lat_deg());
            lon_min = lon_min.min(p.lon_deg());
            lon_max = lon_max.max(p.lon_deg());
        }
        if lat_min > lat_max {
            // no ground points at all
            (lat_min, lat_max, lon_min, lon_max) = (0.0, 0.0, 0.0, 0.0);
        }

        PassSummary {
            run: config.name.clone(),
            sensor: config.sensor.name.clone(),
            samples: samples.len(),
            interior_points: samples.iter().map(|s| s.interior.len()).sum(),
            corner_points: samples.iter().map(|s| s.corners.len()).sum(),
            pole_vectors: samples.iter().map(|s| s.poles.len()).sum(),
            rejected_headings: samples.iter().map(|s| s.rejected).sum(),
            lat_min_deg: lat_min,
            lat_max_deg: lat_max,
            lon_min_deg: lon_min,
            lon_max_deg: lon_max,
        }
    }
}

/// Write pass summary as pretty JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, summary: &PassSummary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

/// Write pass summary JSON to a file.
pub fn write_summary_file(path: &str, summary: &PassSummary) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}
