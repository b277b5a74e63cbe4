//! The configuration-owning simulation model.
//!
//! [`SimulationModel`] ties the pieces together: it holds a [`SimConfig`],
//! the current [`Lattice`] (if any), and the reusable force buffer. It is an
//! ordinary value owned by the caller; nothing here decides when ticks
//! happen — an external scheduler calls [`SimulationModel::step`] at
//! whatever cadence it likes, one call at a time.

use crate::{
    config::SimConfig, force_buffer::ForceBuffer, frequency, lattice::Lattice, phases,
    types::SiteId,
};
use rand::Rng;

/// Owns the configuration and the current lattice.
///
/// Configuration edits never touch an existing lattice; they take effect
/// only when [`SimulationModel::rebuild`] replaces the whole lattice.
pub struct SimulationModel {
    pub cfg: SimConfig,
    lattice: Option<Lattice>,
    forces: ForceBuffer,
}

impl SimulationModel {
    /// Creates a model with no lattice yet; call [`SimulationModel::rebuild`]
    /// before stepping.
    pub fn new(cfg: SimConfig) -> Self {
        Self {
            cfg,
            lattice: None,
            forces: ForceBuffer::with_len(0),
        }
    }

    /// Builds a fresh lattice from the current configuration and stamps the
    /// frequency disorder onto it.
    ///
    /// The previous lattice, including all displacement/velocity state and
    /// amplitude history, is discarded wholesale; sites are never patched in
    /// place. Calling this repeatedly always yields a full replacement.
    pub fn rebuild(&mut self, rng: &mut impl Rng) {
        let mut lattice = Lattice::build(self.cfg.size, self.cfg.variant);
        frequency::assign_frequencies(
            &mut lattice,
            self.cfg.mean_frequency,
            self.cfg.frequency_spread,
            rng,
        );
        self.forces.ensure_len(lattice.sites.len());
        self.lattice = Some(lattice);
    }

    /// Advances the lattice by one leapfrog tick of length `dt`.
    ///
    /// A no-op when no lattice has been built yet.
    pub fn step(&mut self, dt: f32) {
        if let Some(lattice) = self.lattice.as_mut() {
            phases::leapfrog_step(lattice, self.cfg.coupling, dt, &mut self.forces);
        }
    }

    /// Sets the displacement of the site at (row, col) to `displacement`.
    ///
    /// This is the single externally-initiated state mutation, meant to be
    /// called between ticks (e.g. by a click in a viewer). Out-of-range
    /// coordinates and the no-lattice state are ignored.
    pub fn excite(&mut self, row: usize, col: usize, displacement: f32) {
        if let Some(lattice) = self.lattice.as_mut()
            && row < lattice.size
            && col < lattice.size
        {
            let id: SiteId = lattice.site_id(row, col);
            lattice.sites[id].displacement = displacement;
        }
    }

    /// Read access to the current lattice, if one has been built.
    pub fn lattice(&self) -> Option<&Lattice> {
        self.lattice.as_ref()
    }
}
