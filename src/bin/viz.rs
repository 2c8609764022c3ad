use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use footprint_sim::body::wrap_pi;
use footprint_sim::sim::{run_pass, FootprintSample, RunConfig};
use footprint_sim::CentralBody;

fn main() -> eframe::Result {
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_path(&path),
        None => Ok(RunConfig::default()),
    };
    let run = config.and_then(|c| run_pass(&c, &CentralBody::earth()).map(|s| (c, s)));
    let (config, samples) = match run {
        Ok(run) => run,
        Err(e) => {
            eprintln!("footprint-viz: {e}");
            std::process::exit(1);
        }
    };

    let app = FootprintViz { config, samples };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Sensor Footprint Viewer", options, Box::new(|_| Ok(Box::new(app))))
}

struct FootprintViz {
    config: RunConfig,
    samples: Vec<FootprintSample>,
}

/// Split a lon/lat track wherever it wraps across the antimeridian.
fn track_segments(samples: &[FootprintSample]) -> Vec<Vec<[f64; 2]>> {
    let mut segments: Vec<Vec<[f64; 2]>> = vec![vec![]];
    let mut last_lon: Option<f64> = None;
    for s in samples {
        let lon = wrap_pi(s.sub_satellite.lon).to_degrees();
        let lat = s.sub_satellite.lat.to_degrees();
        if last_lon.is_some_and(|l| (lon - l).abs() > 180.0) {
            segments.push(vec![]);
        }
        if let Some(seg) = segments.last_mut() {
            seg.push([lon, lat]);
        }
        last_lon = Some(lon);
    }
    segments
}

impl eframe::App for FootprintViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!(
                "Pass: {}  |  Sensor: {}",
                self.config.name, self.config.sensor.name
            ));
            let corners: usize = self.samples.iter().map(|s| s.corners.len()).sum();
            let rejected: usize = self.samples.iter().map(|s| s.rejected).sum();
            ui.label(format!(
                "Samples: {}  |  Corner points: {}  |  Rejected headings: {}  |  Step: {:.0} s",
                self.samples.len(),
                corners,
                rejected,
                self.config.step,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let corners: PlotPoints = self
                .samples
                .iter()
                .flat_map(|s| s.corners.iter().map(|p| [p.lon_deg(), p.lat_deg()]))
                .collect();
            let interior: PlotPoints = self
                .samples
                .iter()
                .flat_map(|s| s.interior.iter().map(|p| [p.lon_deg(), p.lat_deg()]))
                .collect();
            let segments = track_segments(&self.samples);

            Plot::new("ground_track")
                .x_axis_label("Longitude (deg)")
                .y_axis_label("Latitude (deg)")
                .include_x(-180.0)
                .include_x(180.0)
                .include_y(-90.0)
                .include_y(90.0)
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    for (i, seg) in segments.into_iter().enumerate() {
                        let name = if i == 0 { "Ground track" } else { "" };
                        plot_ui.line(Line::new(name, PlotPoints::from(seg)));
                    }
                    plot_ui.points(Points::new("Corners", corners).radius(1.5));
                    plot_ui.points(Points::new("Interior", interior).radius(1.0));
                });
        });
    }
}
