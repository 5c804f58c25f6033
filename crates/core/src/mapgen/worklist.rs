//! Pending doorway candidates awaiting a placement attempt.

use crate::types::Vector;

use super::seed::RandomSource;

/// Unresolved opening on the edge of a room or at the sealed end of a corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Doorway {
    pub(crate) location: Vector,
    pub(crate) heading: Vector,
    /// Stamp a door here once something is dug beyond it.
    pub(crate) resolves_to_door: bool,
}

impl Doorway {
    pub(crate) fn door(location: Vector, heading: Vector) -> Self {
        Self { location, heading, resolves_to_door: true }
    }

    pub(crate) fn seal(location: Vector, heading: Vector) -> Self {
        Self { location, heading, resolves_to_door: false }
    }
}

/// Unordered bag of candidates; selection is uniform, never FIFO or LIFO.
#[derive(Debug, Default)]
pub(crate) struct Worklist {
    pending: Vec<Doorway>,
}

impl Worklist {
    pub(crate) fn push(&mut self, doorway: Doorway) {
        self.pending.push(doorway);
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn take_random(&mut self, rng: &mut impl RandomSource) -> Option<Doorway> {
        if self.pending.is_empty() {
            return None;
        }
        let last = (self.pending.len() - 1) as i32;
        let which = rng.rand_range(0, last) as usize;
        Some(self.pending.swap_remove(which))
    }
}

impl Extend<Doorway> for Worklist {
    fn extend<I: IntoIterator<Item = Doorway>>(&mut self, doorways: I) {
        self.pending.extend(doorways);
    }
}
