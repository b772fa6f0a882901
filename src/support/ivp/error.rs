use thiserror::Error;

/// Errors that can occur while integrating an initial-value problem.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IvpError {
    /// The integrator configuration is unusable.
    #[error("invalid integrator configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: &'static str,
    },

    /// The requested output points are empty, non-finite, or not strictly increasing.
    #[error("invalid output points: {reason}")]
    InvalidOutputPoints {
        /// What is wrong with the output points.
        reason: &'static str,
    },

    /// The initial state or its derivative is not finite.
    #[error("non-finite state at x={x}")]
    NonFiniteState {
        /// Position where the state was evaluated.
        x: f64,
    },

    /// Error control drove the step size below the smallest usable value.
    #[error("step size underflow at x={x}: step={step:e}")]
    StepSizeUnderflow {
        /// Position reached.
        x: f64,

        /// Step size that was rejected.
        step: f64,
    },

    /// The step budget was exhausted before reaching the last output point.
    #[error("integrator hit step limit at x={x} after {steps} steps")]
    MaxSteps {
        /// Position reached.
        x: f64,

        /// Attempted step count.
        steps: usize,
    },
}
