use crate::support::ivp::IvpConfig;

use super::ResistanceModel;

/// Numerical and modeling choices for a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationConfig {
    /// How layer resistances combine.
    pub resistance: ResistanceModel,

    /// Settings for the hot-stream temperature integration.
    pub integrator: IvpConfig,
}
