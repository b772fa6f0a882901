//! Two-stage Rosenbrock method with an embedded third-order error estimate.
//!
//! This is the L-stable 2(3) pair of Shampine and Reichelt. Stiff components
//! are damped in a single step regardless of the step size, so the step is
//! limited by accuracy alone. The Jacobian and the explicit `x` dependence are
//! approximated by forward differences at the start of each step, and one
//! factorization of `I - h·γ·J` serves all three stages.

use super::OdeSystem;

const GAMMA: f64 = 1.0 / (2.0 + std::f64::consts::SQRT_2);
const E32: f64 = 6.0 + std::f64::consts::SQRT_2;

/// One trial step of the pair.
pub(super) struct Step<const D: usize> {
    /// Second-order state at `x + h`.
    pub(super) y: [f64; D],

    /// Derivative at `x + h`, `y`.
    pub(super) f: [f64; D],

    /// Local error estimate.
    pub(super) err: [f64; D],
}

impl<const D: usize> Step<D> {
    /// Takes a step of size `h` from `(x, y)`, where `f` is the derivative there.
    ///
    /// Returns `None` if the iteration matrix is singular.
    pub(super) fn take(
        system: &impl OdeSystem<D>,
        x: f64,
        y: &[f64; D],
        f: &[f64; D],
        h: f64,
    ) -> Option<Self> {
        let (jacobian, dfdx) = linearize(system, x, y, f, h);
        let lu: Lu<D> = Lu::factor(std::array::from_fn(|i| {
            std::array::from_fn(|j| {
                let identity = if i == j { 1.0 } else { 0.0 };
                identity - h * GAMMA * jacobian[i][j]
            })
        }))?;

        let k1: [f64; D] = lu.solve(std::array::from_fn(|i| f[i] + h * GAMMA * dfdx[i]));
        let y1: [f64; D] = std::array::from_fn(|i| y[i] + 0.5 * h * k1[i]);
        let f1 = system.derivative(x + 0.5 * h, &y1);

        let w2: [f64; D] = lu.solve(std::array::from_fn(|i| f1[i] - k1[i]));
        let k2: [f64; D] = std::array::from_fn(|i| w2[i] + k1[i]);
        let y_new: [f64; D] = std::array::from_fn(|i| y[i] + h * k2[i]);
        let f2 = system.derivative(x + h, &y_new);

        let k3: [f64; D] = lu.solve(std::array::from_fn(|i| {
            f2[i] - E32 * (k2[i] - f1[i]) - 2.0 * (k1[i] - f[i]) + h * GAMMA * dfdx[i]
        }));
        let err = std::array::from_fn(|i| h / 6.0 * (k1[i] - 2.0 * k2[i] + k3[i]));

        Some(Self {
            y: y_new,
            f: f2,
            err,
        })
    }
}

/// Forward-difference approximations of `∂f/∂y` and `∂f/∂x` at `(x, y)`.
fn linearize<const D: usize>(
    system: &impl OdeSystem<D>,
    x: f64,
    y: &[f64; D],
    f: &[f64; D],
    h: f64,
) -> ([[f64; D]; D], [f64; D]) {
    let sqrt_eps = f64::EPSILON.sqrt();

    let mut jacobian = [[0.0; D]; D];
    for (j, &y_j) in y.iter().enumerate() {
        let mut perturbed = *y;
        perturbed[j] = y_j + sqrt_eps * y_j.abs().max(1.0);
        let delta = perturbed[j] - y_j;

        let f_perturbed = system.derivative(x, &perturbed);
        for (row, (fp, f0)) in jacobian.iter_mut().zip(f_perturbed.iter().zip(f)) {
            row[j] = (fp - f0) / delta;
        }
    }

    let dx = (x + sqrt_eps * x.abs().max(h)) - x;
    let f_shifted = system.derivative(x + dx, y);
    let dfdx = std::array::from_fn(|i| (f_shifted[i] - f[i]) / dx);

    (jacobian, dfdx)
}

/// LU factorization with partial pivoting.
struct Lu<const D: usize> {
    lu: [[f64; D]; D],
    pivots: [usize; D],
}

impl<const D: usize> Lu<D> {
    /// Factors `a`, or returns `None` if it is singular.
    fn factor(mut a: [[f64; D]; D]) -> Option<Self> {
        let mut pivots = [0; D];

        for k in 0..D {
            let pivot = (k..D).max_by(|&i, &j| a[i][k].abs().total_cmp(&a[j][k].abs()))?;
            if a[pivot][k] == 0.0 || !a[pivot][k].is_finite() {
                return None;
            }
            a.swap(k, pivot);
            pivots[k] = pivot;

            for i in k + 1..D {
                let factor = a[i][k] / a[k][k];
                a[i][k] = factor;
                for j in k + 1..D {
                    a[i][j] -= factor * a[k][j];
                }
            }
        }

        Some(Self { lu: a, pivots })
    }

    /// Solves `a·x = b` for the factored `a`.
    fn solve(&self, mut b: [f64; D]) -> [f64; D] {
        for (k, &pivot) in self.pivots.iter().enumerate() {
            b.swap(k, pivot);
        }

        // Unit lower triangle.
        for i in 0..D {
            for j in 0..i {
                b[i] -= self.lu[i][j] * b[j];
            }
        }

        for i in (0..D).rev() {
            for j in i + 1..D {
                b[i] -= self.lu[i][j] * b[j];
            }
            b[i] /= self.lu[i][i];
        }

        b
    }
}
