use nalgebra::Vector3;

/// Inertial point-mass state.
#[derive(Debug, Clone)]
pub struct OrbitState {
    pub time: f64,         // s since epoch
    pub pos: Vector3<f64>, // m, ECI
    pub vel: Vector3<f64>, // m/s, ECI
}

fn two_body_accel(pos: &Vector3<f64>, mu: f64) -> Vector3<f64> {
    let r = pos.norm();
    if r < 1.0 {
        return Vector3::zeros();
    }
    -mu / (r * r * r) * pos
}

/// Single RK4 step under two-body gravity.
pub fn rk4_step(state: &OrbitState, dt: f64, mu: f64) -> OrbitState {
    let k1_dr = state.vel;
    let k1_dv = two_body_accel(&state.pos, mu);

    let k2_dr = state.vel + k1_dv * (dt * 0.5);
    let k2_dv = two_body_accel(&(state.pos + k1_dr * (dt * 0.5)), mu);

    let k3_dr = state.vel + k2_dv * (dt * 0.5);
    let k3_dv = two_body_accel(&(state.pos + k2_dr * (dt * 0.5)), mu);

    let k4_dr = state.vel + k3_dv * dt;
    let k4_dv = two_body_accel(&(state.pos + k3_dr * dt), mu);

    OrbitState {
        time: state.time + dt,
        pos: state.pos + (k1_dr + 2.0 * k2_dr + 2.0 * k3_dr + k4_dr) * (dt / 6.0),
        vel: state.vel + (k1_dv + 2.0 * k2_dv + 2.0 * k3_dv + k4_dv) * (dt / 6.0),
    }
}

/// Propagate for `duration` seconds, sampled every `dt` (initial state included).
pub fn propagate_orbit(initial: &OrbitState, dt: f64, duration: f64, mu: f64) -> Vec<OrbitState> {
    // small slack so an exact multiple of dt is not lost to rounding
    let n_steps = (duration / dt + 1e-9).floor() as usize;
    let mut trajectory = Vec::with_capacity(n_steps + 1);
    let mut state = initial.clone();
    trajectory.push(state.clone());

    for _ in 0..n_steps {
        state = rk4_step(&state, dt, mu);
        trajectory.push(state.clone());
    }

    trajectory
}
