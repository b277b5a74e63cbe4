//! Force evaluation and time integration for the oscillator lattice.
//!
//! One tick of the simulation is a leapfrog (velocity-Verlet) step:
//! 1. Half-drift — every displacement advances by `v * dt/2`.
//! 2. [`force_phase`] — net forces for **all** sites are computed from the
//!    half-advanced displacement field and stored in a [`ForceBuffer`].
//! 3. Kick — every velocity advances by `F * dt`.
//! 4. Second half-drift — displacements advance by the updated `v * dt/2`.
//!
//! The force pass reads a consistent snapshot: no velocity is touched until
//! every force is stored. Mixing the two passes would degrade the scheme to
//! forward Euler and the lattice energy would drift.

use crate::{force_buffer::ForceBuffer, lattice::Lattice, types::SiteId};

/// Net force on a single site from the current displacement field.
///
/// `F = -k * x + J * sum(x_n - x)` over the site's four neighbors: a local
/// harmonic restoring force plus linear diffusive coupling. Pure read-only
/// computation.
///
/// ### Parameters
/// - `lattice` - The lattice; only read access is required.
/// - `id` - Site to evaluate.
/// - `coupling` - Global coupling constant J.
#[inline]
pub fn site_force(lattice: &Lattice, id: SiteId, coupling: f32) -> f32 {
    let site = &lattice.sites[id];
    let mut force = -site.stiffness * site.displacement;
    for &n in &site.neighbors {
        force += coupling * (lattice.sites[n].displacement - site.displacement);
    }
    force
}

/// Evaluates [`site_force`] for every site into the buffer.
///
/// The buffer is resized (and cleared) to `lattice.sites.len()` at the
/// start via [`ForceBuffer::ensure_len`], so the same buffer can be reused
/// across steps and rebuilds.
///
/// ### Parameters
/// - `lattice` - The lattice; only read access is required.
/// - `coupling` - Global coupling constant J.
/// - `forces` - Scratch buffer receiving one net force per site.
pub fn force_phase(lattice: &Lattice, coupling: f32, forces: &mut ForceBuffer) {
    forces.ensure_len(lattice.sites.len());
    for id in 0..lattice.sites.len() {
        forces.store(id, site_force(lattice, id, coupling));
    }
}

/// Advances the whole lattice by one leapfrog tick of length `dt`.
///
/// After the second half-drift, each site's `max_abs_displacement` is folded
/// with the new `|displacement|`, so it is monotonically non-decreasing for
/// the lifetime of the lattice.
///
/// `dt > 0` is a precondition; nothing is enforced here.
///
/// ### Parameters
/// - `lattice` - The lattice to advance; all dynamic state is mutated.
/// - `coupling` - Global coupling constant J.
/// - `dt` - Time step.
/// - `forces` - Scratch buffer, fully materialized before any kick.
pub fn leapfrog_step(lattice: &mut Lattice, coupling: f32, dt: f32, forces: &mut ForceBuffer) {
    let half_dt = dt * 0.5;

    for site in &mut lattice.sites {
        site.displacement += site.velocity * half_dt;
    }

    // All forces are stored before the first velocity changes.
    force_phase(lattice, coupling, forces);

    for (id, site) in lattice.sites.iter_mut().enumerate() {
        site.velocity += forces.get(id) * dt;
    }

    for site in &mut lattice.sites {
        site.displacement += site.velocity * half_dt;
        site.max_abs_displacement = site.max_abs_displacement.max(site.displacement.abs());
    }
}
