//! Escape-time evaluation of the quadratic recurrence `z ← z² + c`.
//!
//! Once `|z| > 2` the orbit provably diverges, so the escape test compares the
//! squared magnitude against `ESCAPE_RADIUS²` and avoids a square root.

use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Number of recurrence steps performed before the iterate left the escape
/// radius, or `max_iterations` when it never did.
///
/// The radius test happens before each step, so a seed already outside the
/// radius reports zero iterations.
#[must_use]
pub fn escape_iterations(seed: Complex, map_constant: Complex, max_iterations: u32) -> u32 {
    let iterations = (0..max_iterations).try_fold(seed, |z, iteration| {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z.square() + map_constant)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

/// Escape fraction in `[0, 1]`: iterations performed divided by the cap.
///
/// Orbits that stay bounded for the whole cap return exactly `1.0`. A zero cap
/// performs no iterations and is reported as bounded.
#[must_use]
pub fn escape(seed: Complex, map_constant: Complex, max_iterations: u32) -> f64 {
    if max_iterations == 0 {
        return 1.0;
    }

    f64::from(escape_iterations(seed, map_constant, max_iterations)) / f64::from(max_iterations)
}
