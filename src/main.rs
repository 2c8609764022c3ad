use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use footprint_sim::io::{self, PassSummary};
use footprint_sim::sim::{run_pass, RunConfig};
use footprint_sim::{CentralBody, Result};

/// Project a spacecraft sensor footprint onto the Earth along one orbit pass.
#[derive(Debug, Parser)]
#[command(name = "footprint-sim", version, about)]
struct Args {
    /// Run configuration (JSON). Uses the built-in 700 km imager pass if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every footprint ground point as CSV.
    #[arg(long)]
    csv: Option<String>,

    /// Write the pass summary as JSON.
    #[arg(long)]
    summary: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };
    info!(run = %config.name, "loaded configuration");

    // -----------------------------------------------------------------------
    // Run pass
    // -----------------------------------------------------------------------
    let body = CentralBody::earth();
    let samples = run_pass(&config, &body)?;
    let summary = PassSummary::from_samples(&config, &samples);

    if let Some(path) = &args.csv {
        io::write_footprints_file(path, &samples)?;
        info!(path = %path, "wrote footprint csv");
    }
    if let Some(path) = &args.summary {
        io::write_summary_file(path, &summary)?;
        info!(path = %path, "wrote pass summary");
    }

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let orbit = &config.orbit;
    println!();
    println!("====================================================================");
    println!("  SENSOR FOOTPRINT PASS — {}", config.name);
    println!("====================================================================");
    println!();
    println!("  Orbit");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Altitude:      {:>8.1} km    Eccentricity: {:>8.4}",
        (orbit.sma - body.radius) / 1000.0,
        orbit.ecc
    );
    println!(
        "  Inclination:   {:>8.2} deg   RAAN:         {:>8.2} deg",
        orbit.inc_deg, orbit.raan_deg
    );
    println!(
        "  Step:          {:>8.1} s     Duration:     {:>8.0} s",
        config.step, config.duration
    );
    println!();

    println!("  Sensor: {}", summary.sensor);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Interior pts:  {:>8}       Corner pts:   {:>8}",
        summary.interior_points, summary.corner_points
    );
    println!(
        "  Pole vectors:  {:>8}       Rejected:     {:>8}",
        summary.pole_vectors, summary.rejected_headings
    );
    println!(
        "  Latitude:      {:>8.2} .. {:<8.2} deg",
        summary.lat_min_deg, summary.lat_max_deg
    );
    println!(
        "  Longitude:     {:>8.2} .. {:<8.2} deg",
        summary.lon_min_deg, summary.lon_max_deg
    );
    println!();

    // -----------------------------------------------------------------------
    // Ground track table (sampled)
    // -----------------------------------------------------------------------
    println!("  Ground Track");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>9}  {:>9}  {:>9}  {:>7}  {:>8}",
        "t (s)", "lat (deg)", "lon (deg)", "alt (km)", "corners", "rejected"
    );
    println!("  {}", "─".repeat(60));

    let sample_interval = (samples.len() / 30).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % sample_interval != 0 && i != samples.len() - 1 {
            continue;
        }
        let ssp = &s.sub_satellite;
        println!(
            "  {:>8.1}  {:>9.3}  {:>9.3}  {:>9.1}  {:>7}  {:>8}",
            s.time,
            ssp.lat.to_degrees(),
            footprint_sim::body::wrap_pi(ssp.lon).to_degrees(),
            ssp.altitude / 1000.0,
            s.corners.len(),
            s.rejected
        );
    }

    println!();
    println!("  Pass: {} samples", samples.len());
    println!("====================================================================");
    println!();

    Ok(())
}
