use crate::types::SiteId;

/// A temporary buffer holding one net force per site.
///
/// The integrator must see a consistent snapshot: every site's force is
/// computed from the same displacement field before any velocity changes.
/// This buffer is where a step materializes all forces first, so the later
/// velocity pass reads finished values only. Reusing the buffer across
/// steps also avoids a per-step allocation.
///
/// Internally, `force[i]` corresponds to site `i` (where [`SiteId`] is an
/// index-like type, i.e. `usize`).
#[derive(Debug)]
pub struct ForceBuffer {
    /// Net force for each site.
    force: Vec<f32>,
}

impl ForceBuffer {
    /// Creates a new [`ForceBuffer`] with the given length.
    ///
    /// All forces are initialized to `0.0`.
    ///
    /// ### Parameters
    /// - `len` - Number of sites this buffer can store forces for.
    ///
    /// ### Returns
    /// A new [`ForceBuffer`] of length `len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            force: vec![0.0; len],
        }
    }

    /// Ensures that the internal storage has exactly the given length.
    ///
    /// If the current length differs from `len`, the force array is resized
    /// to `len`. After this call all entries are cleared to `0.0`, even if
    /// the length was already correct.
    ///
    /// ### Parameters
    /// - `len` - Desired length of the internal buffer.
    pub fn ensure_len(&mut self, len: usize) {
        if self.force.len() != len {
            self.force.resize(len, 0.0);
        }
        self.clear();
    }

    /// Clears all stored forces to `0.0` without changing the length.
    pub fn clear(&mut self) {
        for f in &mut self.force {
            *f = 0.0;
        }
    }

    /// Stores the net force for the given site.
    ///
    /// ### Parameters
    /// - `id` - Site ID the force belongs to (used as an index).
    /// - `force` - Net force value to store.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds for the internal array.
    #[inline]
    pub fn store(&mut self, id: SiteId, force: f32) {
        self.force[id] = force;
    }

    /// Returns the stored force for the given site.
    ///
    /// ### Parameters
    /// - `id` - Site ID to query.
    ///
    /// ### Returns
    /// The force most recently stored for `id`, or `0.0` if none was
    /// stored since the last clear.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds for the internal array.
    #[inline]
    pub fn get(&self, id: SiteId) -> f32 {
        self.force[id]
    }

    /// Number of sites the buffer currently holds forces for.
    pub fn len(&self) -> usize {
        self.force.len()
    }

    /// Returns `true` if the buffer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.force.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_len_initializes_zeroed_state() {
        let buf = ForceBuffer::with_len(5);

        assert_eq!(buf.len(), 5);
        for id in 0..5 {
            assert_eq!(buf.get(id), 0.0);
        }
    }

    #[test]
    fn store_and_get_round_trip() {
        let mut buf = ForceBuffer::with_len(3);

        buf.store(0, 1.5);
        buf.store(2, -4.0);

        assert_eq!(buf.get(0), 1.5);
        assert_eq!(buf.get(1), 0.0);
        assert_eq!(buf.get(2), -4.0);
    }

    #[test]
    fn ensure_len_keeps_length_and_clears_when_same() {
        let mut buf = ForceBuffer::with_len(3);
        buf.store(1, 2.0);

        buf.ensure_len(3);

        assert_eq!(buf.len(), 3);
        for id in 0..3 {
            assert_eq!(buf.get(id), 0.0);
        }
    }

    #[test]
    fn ensure_len_resizes_and_clears_when_different() {
        let mut buf = ForceBuffer::with_len(2);
        buf.store(0, 1.0);

        buf.ensure_len(4);
        assert_eq!(buf.len(), 4);
        for id in 0..4 {
            assert_eq!(buf.get(id), 0.0);
        }

        buf.ensure_len(1);
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.get(0), 0.0);
    }

    #[test]
    fn clear_resets_all_entries() {
        let mut buf = ForceBuffer::with_len(3);
        buf.store(0, 1.0);
        buf.store(1, -1.0);

        buf.clear();

        assert_eq!(buf.len(), 3);
        for id in 0..3 {
            assert_eq!(buf.get(id), 0.0);
        }
    }
}
