use thiserror::Error;

/// Per-heading projection failure. Reported for one heading only; the rest of
/// the batch is still projected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The cone angle points past the visible horizon, so the heading never
    /// meets the reference sphere.
    #[error("cone angle {cone:.6} rad is beyond the horizon at {horizon:.6} rad")]
    BeyondHorizon { cone: f64, horizon: f64 },

    /// Sub-satellite or target point sits on a pole; the latitude is valid but
    /// the longitude is not.
    #[error("longitude is indeterminate at latitude {lat:.6} rad")]
    IndeterminateLongitude { lat: f64 },
}

/// Call-level failures of the footprint pipeline and its driver.
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("velocity has no horizontal component; spacecraft-access frame is undefined")]
    DegenerateVelocity,

    #[error("spacecraft has no body-fixed to reference matrix for the pole path")]
    MissingReferenceFrame,

    #[error("invalid Euler sequence {0:?}: axes must be 1..=3 with no consecutive repeats")]
    InvalidEulerSequence([u8; 3]),

    #[error("invalid sensor: {0}")]
    InvalidSensor(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
