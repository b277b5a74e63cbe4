use crate::lattice::NeighborVariant;

/// Global simulation parameters.
///
/// Writing a field has no effect on an existing lattice; parameters are
/// only read when [`crate::model::SimulationModel::rebuild`] runs (for the
/// lattice shape and frequency disorder) or when a step is taken (for
/// `coupling` and `time_step`).
///
/// `time_step > 0` is a precondition of the integrator, not enforced here.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Lattice edge length; the grid holds `size * size` sites. Range 2..=20.
    pub size: usize,
    /// Nearest-neighbor coupling strength J, >= 0.
    pub coupling: f32,
    /// Mean natural frequency of the disorder distribution, >= 0.
    pub mean_frequency: f32,
    /// Half-width of the uniform frequency disorder, >= 0.
    pub frequency_spread: f32,
    /// Integration time step dt, > 0.
    pub time_step: f32,
    /// Neighbor topology used when the lattice is built.
    pub variant: NeighborVariant,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 10,
            coupling: 2.0,
            mean_frequency: 5.0,
            frequency_spread: 2.0,
            time_step: 0.02,
            variant: NeighborVariant::Orthogonal,
        }
    }
}
