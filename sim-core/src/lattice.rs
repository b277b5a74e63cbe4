use crate::types::SiteId;

/// Neighbor topology of a lattice, fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborVariant {
    /// Neighbors at (-1,0), (1,0), (0,-1), (0,1).
    Orthogonal,
    /// Neighbors at (-1,-1), (-1,1), (1,-1), (1,1).
    Diagonal,
}

impl NeighborVariant {
    /// The four (row, col) offsets of this variant.
    pub fn offsets(self) -> [(isize, isize); 4] {
        match self {
            Self::Orthogonal => [(-1, 0), (1, 0), (0, -1), (0, 1)],
            Self::Diagonal => [(-1, -1), (-1, 1), (1, -1), (1, 1)],
        }
    }
}

/// One oscillator node of the lattice.
///
/// `row`/`col` are the site's identity and never change after build.
/// `neighbors` holds indices into the owning lattice's `sites`; the list is
/// wired once at build time and never mutated afterwards. Only
/// `displacement`, `velocity`, and `max_abs_displacement` change while the
/// simulation runs; the frequency fields are stamped once per rebuild.
#[derive(Debug)]
pub struct Site {
    pub row: usize,
    pub col: usize,
    pub displacement: f32,
    pub velocity: f32,
    pub natural_frequency: f32,
    pub stiffness: f32,
    pub max_abs_displacement: f32,
    pub neighbors: [SiteId; 4],
}

/// A square toroidal grid of [`Site`]s, stored row-major.
#[derive(Debug)]
pub struct Lattice {
    pub size: usize,
    pub variant: NeighborVariant,
    pub sites: Vec<Site>,
}

impl Lattice {
    /// Builds a `size x size` lattice with all sites at rest and each site
    /// wired to its four wrapped neighbors.
    ///
    /// Coordinate arithmetic wraps with a true mathematical modulo, so the
    /// grid is a torus in both axes. For `size < 3` the wrapped offsets can
    /// collide and a site's neighbor list then contains duplicates; that is
    /// accepted, every site still gets exactly four entries.
    pub fn build(size: usize, variant: NeighborVariant) -> Self {
        let mut sites = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let mut neighbors = [0; 4];
                for (slot, &(dr, dc)) in variant.offsets().iter().enumerate() {
                    let nr = wrap(row as isize + dr, size);
                    let nc = wrap(col as isize + dc, size);
                    neighbors[slot] = nr * size + nc;
                }

                sites.push(Site {
                    row,
                    col,
                    displacement: 0.0,
                    velocity: 0.0,
                    natural_frequency: 0.0,
                    stiffness: 0.0,
                    max_abs_displacement: 0.0,
                    neighbors,
                });
            }
        }

        Self {
            size,
            variant,
            sites,
        }
    }

    /// Index of the site at (row, col). Coordinates must be in `[0, size)`.
    #[inline]
    pub fn site_id(&self, row: usize, col: usize) -> SiteId {
        row * self.size + col
    }
}

/// Wraps `coord` into `[0, size)` using a non-negative modulo.
#[inline]
fn wrap(coord: isize, size: usize) -> usize {
    coord.rem_euclid(size as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_site_has_exactly_four_neighbor_entries() {
        for size in 2..=6 {
            for variant in [NeighborVariant::Orthogonal, NeighborVariant::Diagonal] {
                let lattice = Lattice::build(size, variant);
                assert_eq!(lattice.sites.len(), size * size);
                for site in &lattice.sites {
                    assert_eq!(site.neighbors.len(), 4);
                    for &n in &site.neighbors {
                        assert!(n < lattice.sites.len());
                    }
                }
            }
        }
    }

    #[test]
    fn orthogonal_wraparound_at_origin() {
        let lattice = Lattice::build(10, NeighborVariant::Orthogonal);
        let origin = &lattice.sites[lattice.site_id(0, 0)];

        let expected = [
            lattice.site_id(9, 0),
            lattice.site_id(1, 0),
            lattice.site_id(0, 9),
            lattice.site_id(0, 1),
        ];
        assert_eq!(origin.neighbors, expected);
    }

    #[test]
    fn diagonal_wraparound_at_origin() {
        let lattice = Lattice::build(10, NeighborVariant::Diagonal);
        let origin = &lattice.sites[lattice.site_id(0, 0)];

        let expected = [
            lattice.site_id(9, 9),
            lattice.site_id(9, 1),
            lattice.site_id(1, 9),
            lattice.site_id(1, 1),
        ];
        assert_eq!(origin.neighbors, expected);
    }

    #[test]
    fn neighbor_relation_is_symmetric_for_size_at_least_three() {
        for size in 3..=7 {
            for variant in [NeighborVariant::Orthogonal, NeighborVariant::Diagonal] {
                let lattice = Lattice::build(size, variant);
                for (id, site) in lattice.sites.iter().enumerate() {
                    for &n in &site.neighbors {
                        assert!(
                            lattice.sites[n].neighbors.contains(&id),
                            "site {id} lists {n}, but not vice versa (size={size}, {variant:?})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn size_two_collapses_to_duplicate_neighbors() {
        // With size = 2 the +1 and -1 offsets wrap to the same coordinate,
        // so orthogonal neighbor lists pair up. Accepted, not an error.
        let lattice = Lattice::build(2, NeighborVariant::Orthogonal);
        let origin = &lattice.sites[lattice.site_id(0, 0)];

        assert_eq!(origin.neighbors[0], origin.neighbors[1]);
        assert_eq!(origin.neighbors[2], origin.neighbors[3]);
        assert_eq!(origin.neighbors[0], lattice.site_id(1, 0));
        assert_eq!(origin.neighbors[2], lattice.site_id(0, 1));
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        for size in 0..=1 {
            let lattice = Lattice::build(size, NeighborVariant::Orthogonal);
            assert_eq!(lattice.sites.len(), size * size);
        }
        // size = 1: all four neighbors are the site itself.
        let lattice = Lattice::build(1, NeighborVariant::Diagonal);
        assert_eq!(lattice.sites[0].neighbors, [0, 0, 0, 0]);
    }

    #[test]
    fn sites_start_at_rest() {
        let lattice = Lattice::build(4, NeighborVariant::Orthogonal);
        for site in &lattice.sites {
            assert_eq!(site.displacement, 0.0);
            assert_eq!(site.velocity, 0.0);
            assert_eq!(site.natural_frequency, 0.0);
            assert_eq!(site.stiffness, 0.0);
            assert_eq!(site.max_abs_displacement, 0.0);
        }
    }

    #[test]
    fn row_major_identity_matches_site_id() {
        let lattice = Lattice::build(5, NeighborVariant::Orthogonal);
        for (id, site) in lattice.sites.iter().enumerate() {
            assert_eq!(lattice.site_id(site.row, site.col), id);
        }
    }
}
