use thiserror::Error;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

/// Errors from [`log_mean_temperature_difference`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LmtdError {
    /// The terminal differences are equal, so the logarithm in the
    /// denominator is zero.
    #[error("terminal temperature differences are equal: {delta_t:?}")]
    EqualDifferences {
        /// The shared terminal difference.
        delta_t: TemperatureInterval,
    },

    /// The terminal differences do not share a strictly positive or strictly
    /// negative sign, or one of them is not finite.
    ///
    /// This happens when the stream temperatures touch or cross inside the
    /// exchanger.
    #[error("terminal temperature differences have mismatched signs: {first:?}, {second:?}")]
    SignMismatch {
        /// Difference at the first end.
        first: TemperatureInterval,

        /// Difference at the second end.
        second: TemperatureInterval,
    },
}

/// Computes the log-mean temperature difference.
///
/// Given the hot-to-cold temperature differences at the two ends of an
/// exchanger, returns `(dt_1 - dt_2) / ln(dt_1 / dt_2)`.
///
/// # Errors
///
/// Returns [`LmtdError::SignMismatch`] if either difference is zero or not
/// finite, or if they have opposite signs. Returns
/// [`LmtdError::EqualDifferences`] if they are equal.
pub fn log_mean_temperature_difference(
    first: TemperatureInterval,
    second: TemperatureInterval,
) -> Result<TemperatureInterval, LmtdError> {
    let dt_1 = first.get::<kelvin>();
    let dt_2 = second.get::<kelvin>();

    let same_sign = (dt_1 > 0.0 && dt_2 > 0.0) || (dt_1 < 0.0 && dt_2 < 0.0);
    if !same_sign || !dt_1.is_finite() || !dt_2.is_finite() {
        return Err(LmtdError::SignMismatch { first, second });
    }

    if dt_1 == dt_2 {
        return Err(LmtdError::EqualDifferences { delta_t: first });
    }

    Ok(TemperatureInterval::new::<kelvin>(
        (dt_1 - dt_2) / (dt_1 / dt_2).ln(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn dt(value: f64) -> TemperatureInterval {
        TemperatureInterval::new::<kelvin>(value)
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let a = log_mean_temperature_difference(dt(330.0), dt(159.0)).unwrap();
        let b = log_mean_temperature_difference(dt(159.0), dt(330.0)).unwrap();

        assert_relative_eq!(a.get::<kelvin>(), b.get::<kelvin>(), max_relative = 1e-14);
        assert_relative_eq!(
            a.get::<kelvin>(),
            171.0 / (330.0_f64 / 159.0).ln(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn lies_between_the_terminal_differences() {
        let lmtd = log_mean_temperature_difference(dt(100.0), dt(20.0))
            .unwrap()
            .get::<kelvin>();
        assert!(lmtd > 20.0 && lmtd < 60.0);
    }

    #[test]
    fn negative_pair_is_allowed() {
        let lmtd = log_mean_temperature_difference(dt(-40.0), dt(-10.0)).unwrap();
        assert_relative_eq!(lmtd.get::<kelvin>(), -30.0 / 4.0_f64.ln());
    }

    #[test]
    fn equal_differences_fail() {
        assert_eq!(
            log_mean_temperature_difference(dt(25.0), dt(25.0)),
            Err(LmtdError::EqualDifferences { delta_t: dt(25.0) })
        );
    }

    #[test]
    fn crossing_profiles_fail() {
        assert!(matches!(
            log_mean_temperature_difference(dt(330.0), dt(-100.0)),
            Err(LmtdError::SignMismatch { .. })
        ));
        assert!(matches!(
            log_mean_temperature_difference(dt(0.0), dt(10.0)),
            Err(LmtdError::SignMismatch { .. })
        ));
        assert!(matches!(
            log_mean_temperature_difference(dt(f64::INFINITY), dt(10.0)),
            Err(LmtdError::SignMismatch { .. })
        ));
    }
}
