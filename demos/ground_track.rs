use footprint_sim::body::{wrap_pi, R_EARTH};
use footprint_sim::footprint::FootprintExtractor;
use footprint_sim::orbital::{propagate_orbit, KeplerianElements, OrbitState};
use footprint_sim::{CentralBody, ProjectionError, Result, SensorBuilder, SpacecraftState};

fn main() -> Result<()> {
    let body = CentralBody::earth();

    println!("=== Push-broom Imager: 500 km, 97.4 deg ===\n");

    let orbit = KeplerianElements::from_degrees(R_EARTH + 500_000.0, 0.0, 97.4, 30.0, 0.0, 0.0);
    let (pos, vel) = orbit.to_state_vector(body.mu);
    let period = orbit.period(body.mu);
    println!("Period: {:.1} min", period / 60.0);

    // Narrow along-track, wide cross-track rectangle, rolled 20 deg off nadir
    let clock: Vec<f64> = [80.0_f64, 100.0, 260.0, 280.0].iter().map(|a| a.to_radians()).collect();
    let sensor = SensorBuilder::new("pushbroom")
        .boundary(&[0.45, 0.45, 0.45, 0.45], &clock)
        .body_offset([20.0, 0.0, 0.0], [1, 2, 3])
        .build()?;
    let extractor = FootprintExtractor::new(&body);
    println!("Boresight off nadir: {:.1} deg", sensor.boresight().z.acos().to_degrees());

    // Inertial frame taken as Earth-fixed at epoch; no Earth rotation in this demo
    let initial = OrbitState { time: 0.0, pos, vel };
    let track = propagate_orbit(&initial, 300.0, period, body.mu);

    println!();
    println!(
        "{:>7}  {:>9}  {:>9}  {:>30}",
        "t (s)", "ssp lat", "ssp lon", "corners (lat, lon deg)"
    );
    for state in &track {
        let sc = SpacecraftState::nadir_pointing(state.pos, state.vel)?;
        let footprint = extractor.extract(&sc, &sensor)?;
        let ssp = footprint.sub_satellite;

        let corners: Vec<String> = footprint
            .corners
            .iter()
            .map(|c| match c {
                Ok(p) => format!("({:.1}, {:.1})", p.lat_deg(), p.lon_deg()),
                Err(ProjectionError::BeyondHorizon { .. }) => "(horizon)".into(),
                Err(ProjectionError::IndeterminateLongitude { lat }) => {
                    format!("({:.1}, ?)", lat.to_degrees())
                }
            })
            .collect();

        println!(
            "{:>7.0}  {:>9.2}  {:>9.2}  {}",
            state.time,
            ssp.lat.to_degrees(),
            wrap_pi(ssp.lon).to_degrees(),
            corners.join(" ")
        );
    }

    Ok(())
}
