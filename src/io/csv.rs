use std::io::{self, Write};

use crate::sim::FootprintSample;

/// Write footprint ground points in CSV format.
///
/// Columns: time, kind, index, lat_deg, lon_deg
/// `kind` is `ssp`, `interior` or `corner`; one `ssp` row per sample.
pub fn write_footprints<W: Write>(writer: &mut W, samples: &[FootprintSample]) -> io::Result<()> {
    writeln!(writer, "time,kind,index,lat_deg,lon_deg")?;

    for s in samples {
        let ssp = &s.sub_satellite;
        let ssp_lon = crate::body::wrap_pi(ssp.lon);
        writeln!(
            writer,
            "{:.3},ssp,0,{:.6},{:.6}",
            s.time,
            ssp.lat.to_degrees(),
            ssp_lon.to_degrees(),
        )?;
        for (kind, points) in [("interior", &s.interior), ("corner", &s.corners)] {
            for (i, p) in points.iter().enumerate() {
                writeln!(
                    writer,
                    "{:.3},{},{},{:.6},{:.6}",
                    s.time,
                    kind,
                    i,
                    p.lat_deg(),
                    p.lon_deg(),
                )?;
            }
        }
    }

    Ok(())
}

/// Write footprint CSV to a file at the given path.
pub fn write_footprints_file(path: &str, samples: &[FootprintSample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_footprints(&mut file, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::SubSatellitePoint;
    use crate::projection::GroundPoint;

    #[test]
    fn csv_output_has_header_and_rows() {
        let samples = vec![FootprintSample {
            time: 0.0,
            sub_satellite: SubSatellitePoint { lat: 0.0, lon: 6.0, altitude: 7e5 },
            interior: vec![GroundPoint { lat: 0.0, lon: 0.1 }],
            corners: vec![
                GroundPoint { lat: 0.1, lon: 0.0 },
                GroundPoint { lat: -0.1, lon: 0.0 },
            ],
            poles: vec![],
            rejected: 0,
        }];

        let mut buf = Vec::new();
        write_footprints(&mut buf, &samples).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 5); // header + ssp + 1 interior + 2 corners
        assert!(lines[1].starts_with("0.000,ssp,0,"));
        // longitude reported in (-180, 180]
        assert!(lines[1].contains(",-"), "{}", lines[1]);
        assert!(lines[4].starts_with("0.000,corner,1,"));
    }
}
