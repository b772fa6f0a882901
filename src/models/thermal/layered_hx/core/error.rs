use thiserror::Error;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::{constraint::ConstraintError, hx::LmtdError, ivp::IvpError};

/// Errors that can occur while simulating a layered counterflow heat exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    /// A model input or parameter is outside its valid range.
    #[error("invalid {parameter}")]
    InvalidInput {
        /// Name of the offending input.
        parameter: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The hot inlet is not hotter than the cold inlet.
    #[error("hot inlet temperature {hot:?} must exceed cold inlet temperature {cold:?}")]
    InletTemperatures {
        /// Hot stream inlet temperature.
        hot: ThermodynamicTemperature,

        /// Cold stream inlet temperature.
        cold: ThermodynamicTemperature,
    },

    /// The stream temperatures do not admit a log-mean temperature difference.
    ///
    /// This occurs when the terminal differences are equal (e.g., a single
    /// output position) or when the streams touch or cross.
    #[error("degenerate temperature profile")]
    DegenerateProfile(#[from] LmtdError),

    /// The hot-stream temperature integration failed.
    #[error("temperature integration failed")]
    IntegrationFailure(#[from] IvpError),
}

impl SimulationError {
    /// Returns a closure mapping a constraint violation to [`SimulationError::InvalidInput`].
    pub(super) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { parameter, source }
    }
}
