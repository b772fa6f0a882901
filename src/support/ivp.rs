//! Adaptive initial-value problem integration.
//!
//! Integrates `dy/dx = f(x, y)` for a fixed-size state `y: [f64; D]` and
//! reports the solution at caller-chosen output points, the same way a general
//! purpose IVP solver does. Steps are sized by local error control against
//! [`IvpConfig`] tolerances.
//!
//! By default integration starts with the explicit Dormand–Prince 5(4) pair.
//! When its step size stays pinned at the stability boundary, the problem is
//! treated as stiff and the remaining steps use an L-stable Rosenbrock 2(3)
//! pair, which takes steps as large as accuracy allows.
//!
//! # Example
//!
//! ```
//! use layered_hx::support::ivp::{IvpConfig, solve};
//!
//! // dy/dx = -y, y(0) = 1
//! let outputs = [0.0, 0.5, 1.0];
//! let ys = solve(&|_x: f64, y: &[f64; 1]| [-y[0]], [1.0], &outputs, &IvpConfig::default())
//!     .unwrap();
//!
//! assert_eq!(ys[0], [1.0]);
//! assert!((ys[2][0] - (-1.0_f64).exp()).abs() < 1e-7);
//! ```

mod config;
mod dormand_prince;
mod error;
mod rosenbrock;

pub use config::{IvpConfig, IvpMethod};
pub use error::IvpError;

use log::{debug, trace};

/// Right-hand side of an ordinary differential equation system.
pub trait OdeSystem<const D: usize> {
    /// Returns `dy/dx` at the given position and state.
    fn derivative(&self, x: f64, y: &[f64; D]) -> [f64; D];
}

impl<F, const D: usize> OdeSystem<D> for F
where
    F: Fn(f64, &[f64; D]) -> [f64; D],
{
    fn derivative(&self, x: f64, y: &[f64; D]) -> [f64; D] {
        self(x, y)
    }
}

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;

// Step size exponents, one over the order of the error estimate.
const EXPLICIT_EXPONENT: f64 = 1.0 / 5.0;
const STIFF_EXPONENT: f64 = 1.0 / 3.0;

// Stability boundary of the Dormand–Prince pair along the negative real axis.
const STIFF_H_LAMBDA: f64 = 3.25;
const STIFF_STEPS: usize = 15;
const NON_STIFF_STEPS: usize = 6;

/// Integrates `system` from `y0` and returns the state at each output point.
///
/// The first output point is the initial position, so the first returned
/// state is `y0` unchanged. Output points must be finite and strictly
/// increasing.
///
/// # Errors
///
/// Returns an [`IvpError`] if the inputs are invalid, the state becomes
/// non-finite, the step size underflows, or the step budget runs out.
pub fn solve<const D: usize>(
    system: &impl OdeSystem<D>,
    y0: [f64; D],
    outputs: &[f64],
    config: &IvpConfig,
) -> Result<Vec<[f64; D]>, IvpError> {
    config.validate()?;
    check_outputs(outputs)?;

    let x0 = outputs[0];
    let f0 = system.derivative(x0, &y0);
    if !all_finite(&y0) || !all_finite(&f0) {
        return Err(IvpError::NonFiniteState { x: x0 });
    }

    let mut ys = Vec::with_capacity(outputs.len());
    ys.push(y0);

    let Some(&x_end) = outputs.last() else {
        return Ok(ys);
    };
    if outputs.len() == 1 {
        return Ok(ys);
    }

    let mut x = x0;
    let mut y = y0;
    let mut f = f0;
    let mut h = config
        .initial_step
        .unwrap_or_else(|| initial_step(system, x0, &y0, &f0, config))
        .min(x_end - x0);

    let mut stiff = config.method == IvpMethod::Stiff;
    let mut detector = StiffnessDetector::default();
    let mut steps = 0;
    let mut rejected = 0;

    for &target in &outputs[1..] {
        while x < target {
            if steps >= config.max_steps {
                return Err(IvpError::MaxSteps { x, steps });
            }
            steps += 1;

            let lands = h >= target - x;
            let h_try = if lands { target - x } else { h };
            if h_try <= config.min_step || x + h_try == x {
                return Err(IvpError::StepSizeUnderflow { x, step: h_try });
            }

            let trial = Trial::take(system, stiff, x, &y, &f, h_try);
            let err = error_norm(&trial.err, &y, &trial.y, config);
            let exponent = if stiff {
                STIFF_EXPONENT
            } else {
                EXPLICIT_EXPONENT
            };

            if err <= 1.0 && all_finite(&trial.y) && all_finite(&trial.f) {
                x = if lands { target } else { x + h_try };
                y = trial.y;
                f = trial.f;
                let factor = if err == 0.0 {
                    MAX_FACTOR
                } else {
                    (SAFETY * err.powf(-exponent)).clamp(MIN_FACTOR, MAX_FACTOR)
                };
                // A clipped landing step says nothing about the natural step size.
                h = if lands { h.max(h_try * factor) } else { h_try * factor };

                if !stiff
                    && config.method == IvpMethod::Auto
                    && detector.is_stiff(trial.stiffness)
                {
                    debug!("stiff at x={x:e} after {steps} steps, switching to Rosenbrock");
                    stiff = true;
                }
            } else {
                rejected += 1;
                trace!("rejected step at x={x:e}, h={h_try:e}, err={err:e}");
                h = if err.is_finite() {
                    h_try * (SAFETY * err.powf(-exponent)).clamp(MIN_FACTOR, 1.0)
                } else {
                    h_try * MIN_FACTOR
                };
            }
        }
        ys.push(y);
    }

    debug!(
        "integrated {} outputs over [{x0}, {x_end}] in {steps} steps ({rejected} rejected, stiff: {stiff})",
        outputs.len()
    );

    Ok(ys)
}

/// A trial step from whichever pair is active.
struct Trial<const D: usize> {
    y: [f64; D],
    f: [f64; D],
    err: [f64; D],
    stiffness: f64,
}

impl<const D: usize> Trial<D> {
    fn take(
        system: &impl OdeSystem<D>,
        stiff: bool,
        x: f64,
        y: &[f64; D],
        f: &[f64; D],
        h: f64,
    ) -> Self {
        if !stiff {
            let step = dormand_prince::Step::take(system, x, y, f, h);
            return Self {
                y: step.y,
                f: step.f,
                err: step.err,
                stiffness: step.stiffness,
            };
        }

        match rosenbrock::Step::take(system, x, y, f, h) {
            Some(step) => Self {
                y: step.y,
                f: step.f,
                err: step.err,
                stiffness: 0.0,
            },
            // Singular iteration matrix; rejected like a failed step.
            None => Self {
                y: *y,
                f: *f,
                err: [f64::INFINITY; D],
                stiffness: 0.0,
            },
        }
    }
}

/// Counts consecutive explicit steps held at the stability boundary.
#[derive(Debug, Default)]
struct StiffnessDetector {
    stiff: usize,
    non_stiff: usize,
}

impl StiffnessDetector {
    fn is_stiff(&mut self, h_lambda: f64) -> bool {
        if h_lambda > STIFF_H_LAMBDA {
            self.non_stiff = 0;
            self.stiff += 1;
            self.stiff >= STIFF_STEPS
        } else {
            self.non_stiff += 1;
            if self.non_stiff >= NON_STIFF_STEPS {
                self.stiff = 0;
            }
            false
        }
    }
}

/// Scaled RMS norm of a local error estimate; a step is acceptable at or below one.
fn error_norm<const D: usize>(
    err: &[f64; D],
    y_old: &[f64; D],
    y_new: &[f64; D],
    config: &IvpConfig,
) -> f64 {
    rms(
        |i| {
            let scale = config.abs_tol + config.rel_tol * y_old[i].abs().max(y_new[i].abs());
            err[i] / scale
        },
        D,
    )
}

fn check_outputs(outputs: &[f64]) -> Result<(), IvpError> {
    if outputs.is_empty() {
        return Err(IvpError::InvalidOutputPoints {
            reason: "no output points",
        });
    }
    if outputs.iter().any(|x| !x.is_finite()) {
        return Err(IvpError::InvalidOutputPoints {
            reason: "output points must be finite",
        });
    }
    if outputs.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(IvpError::InvalidOutputPoints {
            reason: "output points must be strictly increasing",
        });
    }
    Ok(())
}

/// Starting step size estimate from Hairer, Nørsett & Wanner, Section II.4.
fn initial_step<const D: usize>(
    system: &impl OdeSystem<D>,
    x0: f64,
    y0: &[f64; D],
    f0: &[f64; D],
    config: &IvpConfig,
) -> f64 {
    let scale: [f64; D] = std::array::from_fn(|i| config.abs_tol + config.rel_tol * y0[i].abs());

    let d0 = rms(|i| y0[i] / scale[i], D);
    let d1 = rms(|i| f0[i] / scale[i], D);
    let h0 = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    };

    let y1: [f64; D] = std::array::from_fn(|i| y0[i] + h0 * f0[i]);
    let f1 = system.derivative(x0 + h0, &y1);
    let d2 = rms(|i| (f1[i] - f0[i]) / scale[i], D) / h0;

    let d_max = d1.max(d2);
    let h1 = if d_max <= 1e-15 || !d_max.is_finite() {
        (h0 * 1e-3).max(1e-6)
    } else {
        (0.01 / d_max).powf(0.2)
    };

    (100.0 * h0).min(h1)
}

fn rms(component: impl Fn(usize) -> f64, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let sum: f64 = (0..len).map(|i| component(i).powi(2)).sum();
    (sum / len as f64).sqrt()
}

fn all_finite<const D: usize>(y: &[f64; D]) -> bool {
    y.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn decay(rate: f64) -> impl Fn(f64, &[f64; 1]) -> [f64; 1] {
        move |_x, y| [-rate * y[0]]
    }

    #[test]
    fn exponential_decay_matches_closed_form() {
        let outputs: Vec<f64> = (0..=10).map(|i| f64::from(i) * 0.1).collect();
        let ys = solve(&decay(3.0), [2.0], &outputs, &IvpConfig::default()).unwrap();

        assert_eq!(ys.len(), outputs.len());
        for (x, y) in outputs.iter().zip(&ys) {
            assert_relative_eq!(y[0], 2.0 * (-3.0 * x).exp(), max_relative = 1e-6);
        }
    }

    #[test]
    fn first_output_is_the_initial_state() {
        let ys = solve(&decay(1.0), [623.15], &[0.0, 1.0], &IvpConfig::default()).unwrap();
        assert_eq!(ys[0], [623.15]);
    }

    #[test]
    fn single_output_point_returns_initial_state() {
        let ys = solve(&decay(1.0), [5.0], &[0.0], &IvpConfig::default()).unwrap();
        assert_eq!(ys, vec![[5.0]]);
    }

    #[test]
    fn harmonic_oscillator() {
        let system = |_x: f64, y: &[f64; 2]| [y[1], -y[0]];
        let outputs = [0.0, std::f64::consts::FRAC_PI_2, std::f64::consts::PI];
        let ys = solve(&system, [0.0, 1.0], &outputs, &IvpConfig::default()).unwrap();

        assert_relative_eq!(ys[1][0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(ys[1][1], 0.0, epsilon = 1e-6);
        assert_relative_eq!(ys[2][0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(ys[2][1], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn fast_decay_settles_on_its_asymptote() {
        let system = |_x: f64, y: &[f64; 1]| [-2000.0 * (y[0] - 293.15)];
        let ys = solve(&system, [623.15], &[0.0, 0.05], &IvpConfig::default()).unwrap();
        assert_relative_eq!(ys[1][0], 293.15, epsilon = 1e-3);
    }

    #[test]
    fn rejects_bad_output_points() {
        let config = IvpConfig::default();
        assert!(matches!(
            solve(&decay(1.0), [1.0], &[], &config),
            Err(IvpError::InvalidOutputPoints { .. })
        ));
        assert!(matches!(
            solve(&decay(1.0), [1.0], &[0.0, 0.5, 0.5], &config),
            Err(IvpError::InvalidOutputPoints { .. })
        ));
        assert!(matches!(
            solve(&decay(1.0), [1.0], &[0.0, f64::NAN], &config),
            Err(IvpError::InvalidOutputPoints { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_initial_state() {
        let result = solve(&decay(1.0), [f64::NAN], &[0.0, 1.0], &IvpConfig::default());
        assert!(matches!(result, Err(IvpError::NonFiniteState { .. })));
    }

    #[test]
    fn step_budget_is_enforced() {
        let config = IvpConfig {
            max_steps: 3,
            ..IvpConfig::default()
        };
        let result = solve(&decay(50.0), [1.0], &[0.0, 10.0], &config);
        assert!(matches!(result, Err(IvpError::MaxSteps { steps: 3, .. })));
    }

    fn stiff_relaxation(rate: f64) -> impl Fn(f64, &[f64; 1]) -> [f64; 1] {
        move |_x, y| [-rate * (y[0] - 293.15)]
    }

    #[test]
    fn stiff_relaxation_switches_to_rosenbrock_steps() {
        let outputs = [0.0, 0.015_625, 0.031_25, 0.046_875, 0.0625];
        let ys = solve(&stiff_relaxation(1.0e10), [623.15], &outputs, &IvpConfig::default())
            .unwrap();

        assert_eq!(ys[0], [623.15]);
        for y in &ys[1..] {
            assert_relative_eq!(y[0], 293.15, epsilon = 1e-6);
        }
    }

    #[test]
    fn explicit_steps_alone_exhaust_the_budget_on_stiff_relaxation() {
        let config = IvpConfig {
            method: IvpMethod::Explicit,
            ..IvpConfig::default()
        };
        let result = solve(&stiff_relaxation(1.0e10), [623.15], &[0.0, 0.0625], &config);

        assert!(matches!(result, Err(IvpError::MaxSteps { .. })));
    }

    #[test]
    fn stiff_method_matches_closed_form() {
        let config = IvpConfig {
            method: IvpMethod::Stiff,
            ..IvpConfig::default()
        };
        let outputs: Vec<f64> = (0..=10).map(|i| f64::from(i) * 0.1).collect();
        let ys = solve(&decay(3.0), [2.0], &outputs, &config).unwrap();

        for (x, y) in outputs.iter().zip(&ys) {
            assert_relative_eq!(y[0], 2.0 * (-3.0 * x).exp(), max_relative = 1e-4);
        }
    }

    #[test]
    fn stiffness_needs_consecutive_evidence() {
        let mut detector = StiffnessDetector::default();
        for _ in 0..STIFF_STEPS - 1 {
            assert!(!detector.is_stiff(10.0));
        }
        for _ in 0..NON_STIFF_STEPS {
            assert!(!detector.is_stiff(0.5));
        }
        for _ in 0..STIFF_STEPS - 1 {
            assert!(!detector.is_stiff(10.0));
        }
        assert!(detector.is_stiff(10.0));
    }

    #[test]
    fn blow_up_underflows_the_step_size() {
        // y' = y^2 with y(0) = 1 has a pole at x = 1.
        let system = |_x: f64, y: &[f64; 1]| [y[0] * y[0]];
        let result = solve(&system, [1.0], &[0.0, 2.0], &IvpConfig::default());
        assert!(matches!(
            result,
            Err(IvpError::StepSizeUnderflow { .. } | IvpError::MaxSteps { .. })
        ));
    }
}
