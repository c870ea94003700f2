use rand::Rng;

use crate::settings::Simulation;

/// Temperature after `elapsed_secs`: a slow sine swing around the baseline plus jitter.
pub fn simulated_temperature(elapsed_secs: f64, simulation: &Simulation) -> f64 {
    let radians = elapsed_secs / simulation.period_secs.max(1.0) * 2.0 * std::f64::consts::PI;
    let swing = radians.sin() * simulation.amplitude;

    let noise = simulation.noise.abs();
    let jitter = if noise > 0.0 {
        rand::rng().random_range(-noise..=noise)
    } else {
        0.0
    };

    ((simulation.baseline + swing + jitter) * 100.0).round() / 100.0
}
