use super::IvpError;

/// How steps are taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IvpMethod {
    /// Start with Dormand–Prince steps and switch to Rosenbrock steps for the
    /// rest of the integration once the problem is detected as stiff.
    #[default]
    Auto,

    /// Dormand–Prince 5(4) steps throughout.
    Explicit,

    /// Rosenbrock 2(3) steps throughout.
    Stiff,
}

/// Integrator configuration.
///
/// The default tolerances match those of common general-purpose IVP solvers
/// (`sqrt(f64::EPSILON)`-sized, about 1.49e-8).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IvpConfig {
    /// Step method.
    pub method: IvpMethod,

    /// Relative tolerance on each state component.
    pub rel_tol: f64,

    /// Absolute tolerance on each state component.
    pub abs_tol: f64,

    /// First step size to try, or `None` to estimate one.
    pub initial_step: Option<f64>,

    /// Smallest step size allowed before giving up.
    pub min_step: f64,

    /// Maximum number of attempted steps across the whole integration.
    pub max_steps: usize,
}

impl Default for IvpConfig {
    fn default() -> Self {
        Self {
            method: IvpMethod::Auto,
            rel_tol: 1.490_116_12e-8,
            abs_tol: 1.490_116_12e-8,
            initial_step: None,
            min_step: 0.0,
            max_steps: 100_000,
        }
    }
}

impl IvpConfig {
    pub(super) fn validate(&self) -> Result<(), IvpError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.rel_tol) || !positive(self.abs_tol) {
            return Err(IvpError::InvalidConfig {
                reason: "tolerances must be positive and finite",
            });
        }
        if self.initial_step.is_some_and(|h| !positive(h)) {
            return Err(IvpError::InvalidConfig {
                reason: "initial step must be positive and finite",
            });
        }
        if self.min_step.is_nan() || self.min_step < 0.0 {
            return Err(IvpError::InvalidConfig {
                reason: "minimum step must not be negative",
            });
        }
        Ok(())
    }
}
