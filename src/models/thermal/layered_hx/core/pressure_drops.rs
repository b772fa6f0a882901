use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};
use uom::si::f64::Pressure;

/// Pressure drops along the hot and cold streams.
///
/// Each pressure drop is defined as `p_inlet - p_outlet` for the stream and is
/// non-negative. The same type describes a single layer or the whole stack.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureDrops {
    hot: Pressure,
    cold: Pressure,
}

impl PressureDrops {
    /// Constructs validated pressure drops.
    ///
    /// # Errors
    ///
    /// Returns an error if either pressure drop is negative.
    pub fn new(hot: Pressure, cold: Pressure) -> ConstraintResult<Self> {
        let hot = Constrained::<Pressure, NonNegative>::new(hot)?;
        let cold = Constrained::<Pressure, NonNegative>::new(cold)?;
        Ok(Self {
            hot: hot.into_inner(),
            cold: cold.into_inner(),
        })
    }

    /// Constructs pressure drops without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both pressure drops are non-negative.
    #[must_use]
    pub fn new_unchecked(hot: Pressure, cold: Pressure) -> Self {
        Self { hot, cold }
    }

    /// Returns the pressure drop of the hot stream.
    #[must_use]
    pub fn hot(&self) -> Pressure {
        self.hot
    }

    /// Returns the pressure drop of the cold stream.
    #[must_use]
    pub fn cold(&self) -> Pressure {
        self.cold
    }

    /// Returns the drops across `num_layers` identical layers in series.
    #[must_use]
    pub fn across_layers(&self, num_layers: usize) -> Self {
        let n = num_layers as f64;
        Self {
            hot: self.hot * n,
            cold: self.cold * n,
        }
    }
}
