//! Dormand–Prince 5(4) embedded Runge–Kutta pair.
//!
//! The fifth-order solution is propagated and the fourth-order embedded
//! solution only feeds the local error estimate. The last stage is evaluated
//! at the new state, so its derivative is reused as the first stage of the
//! next step.
//!
//! Each step also estimates `h·|∂f/∂y|` from the last two stages, which both
//! sit at `x + h`. A value beyond the stability boundary of the pair means the
//! step size is limited by stability rather than accuracy.

use super::OdeSystem;

const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth-order weights, also the last row of the tableau.
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Fifth-order minus fourth-order weights.
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339_200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

/// One trial step of the pair.
pub(super) struct Step<const D: usize> {
    /// Fifth-order state at `x + h`.
    pub(super) y: [f64; D],

    /// Derivative at `x + h`, `y`.
    pub(super) f: [f64; D],

    /// Local error estimate.
    pub(super) err: [f64; D],

    /// Estimate of `h·|∂f/∂y|` over the step.
    pub(super) stiffness: f64,
}

impl<const D: usize> Step<D> {
    /// Takes a step of size `h` from `(x, y)`, where `f` is the derivative there.
    pub(super) fn take(
        system: &impl OdeSystem<D>,
        x: f64,
        y: &[f64; D],
        f: &[f64; D],
        h: f64,
    ) -> Self {
        let k1 = *f;
        let k2 = system.derivative(x + C2 * h, &combine(y, h, |i| A21 * k1[i]));
        let k3 = system.derivative(
            x + C3 * h,
            &combine(y, h, |i| A31 * k1[i] + A32 * k2[i]),
        );
        let k4 = system.derivative(
            x + C4 * h,
            &combine(y, h, |i| A41 * k1[i] + A42 * k2[i] + A43 * k3[i]),
        );
        let k5 = system.derivative(
            x + C5 * h,
            &combine(y, h, |i| {
                A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]
            }),
        );
        let y6 = combine(y, h, |i| {
            A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]
        });
        let k6 = system.derivative(x + h, &y6);

        let y_new = combine(y, h, |i| {
            B1 * k1[i] + B3 * k3[i] + B4 * k4[i] + B5 * k5[i] + B6 * k6[i]
        });
        let k7 = system.derivative(x + h, &y_new);

        let err = std::array::from_fn(|i| {
            h * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k7[i])
        });

        let slope_change: f64 = (0..D).map(|i| (k7[i] - k6[i]).powi(2)).sum();
        let state_change: f64 = (0..D).map(|i| (y_new[i] - y6[i]).powi(2)).sum();
        let stiffness = if state_change > 0.0 {
            h * (slope_change / state_change).sqrt()
        } else {
            0.0
        };

        Self {
            y: y_new,
            f: k7,
            err,
            stiffness,
        }
    }
}

fn combine<const D: usize>(y: &[f64; D], h: f64, slope: impl Fn(usize) -> f64) -> [f64; D] {
    std::array::from_fn(|i| y[i] + h * slope(i))
}
