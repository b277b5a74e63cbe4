use crate::lattice::Lattice;
use rand::Rng;

/// Stamps a random natural frequency and the derived stiffness onto every
/// site of the lattice.
///
/// Each site independently draws `mean + spread * u` with `u` uniform over
/// `[-1, 1)`. Draws below zero are clamped: natural frequencies are never
/// negative. Stiffness is always the square of the clamped frequency.
///
/// This runs once per rebuild; frequencies are not resampled while the
/// simulation is stepping.
pub fn assign_frequencies(lattice: &mut Lattice, mean: f32, spread: f32, rng: &mut impl Rng) {
    for site in &mut lattice.sites {
        let raw = mean + spread * rng.random_range(-1.0f32..1.0);
        site.natural_frequency = raw.max(0.0);
        site.stiffness = site.natural_frequency * site.natural_frequency;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::NeighborVariant;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn frequencies_are_non_negative_and_stiffness_is_square() {
        let mut lattice = Lattice::build(10, NeighborVariant::Orthogonal);
        let mut rng = StdRng::seed_from_u64(42);

        assign_frequencies(&mut lattice, 1.0, 3.0, &mut rng);

        for site in &lattice.sites {
            assert!(site.natural_frequency >= 0.0);
            assert_eq!(
                site.stiffness,
                site.natural_frequency * site.natural_frequency
            );
        }
    }

    #[test]
    fn zero_spread_gives_every_site_the_mean_exactly() {
        let mut lattice = Lattice::build(4, NeighborVariant::Orthogonal);
        let mut rng = StdRng::seed_from_u64(7);

        assign_frequencies(&mut lattice, 5.0, 0.0, &mut rng);

        for site in &lattice.sites {
            assert_eq!(site.natural_frequency, 5.0);
            assert_eq!(site.stiffness, 25.0);
        }
    }

    #[test]
    fn negative_draws_are_clamped_to_zero() {
        // With mean 0 roughly half the draws land below zero; after
        // clamping they must all sit exactly at 0.
        let mut lattice = Lattice::build(10, NeighborVariant::Orthogonal);
        let mut rng = StdRng::seed_from_u64(1);

        assign_frequencies(&mut lattice, 0.0, 1.0, &mut rng);

        assert!(lattice.sites.iter().all(|s| s.natural_frequency >= 0.0));
        assert!(
            lattice
                .sites
                .iter()
                .any(|s| s.natural_frequency == 0.0 && s.stiffness == 0.0)
        );
        assert!(lattice.sites.iter().any(|s| s.natural_frequency > 0.0));
    }

    #[test]
    fn same_seed_reproduces_the_same_disorder() {
        let mut a = Lattice::build(6, NeighborVariant::Orthogonal);
        let mut b = Lattice::build(6, NeighborVariant::Orthogonal);

        assign_frequencies(&mut a, 5.0, 2.0, &mut StdRng::seed_from_u64(99));
        assign_frequencies(&mut b, 5.0, 2.0, &mut StdRng::seed_from_u64(99));

        for (sa, sb) in a.sites.iter().zip(&b.sites) {
            assert_eq!(sa.natural_frequency, sb.natural_frequency);
        }
    }
}
