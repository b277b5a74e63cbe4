/// Identifier for a site in a [`crate::lattice::Lattice`].
///
/// This is an index into `Lattice::sites`, and is only meaningful within
/// the lifetime of a given `Lattice` instance.
pub type SiteId = usize;
