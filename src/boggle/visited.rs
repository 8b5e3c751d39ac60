/// Largest number of cells a board may have. One bit per cell.
pub const MAX_CELLS: usize = 256;

/// Cells consumed by an in-progress path. Marking a cell returns a new set, so every
/// search state keeps its own snapshot and sibling branches never see each other's cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct VisitedSet {
    // bit is one if the cell at that linear index is used
    used: [u128; 2],
}

impl VisitedSet {
    pub fn empty() -> Self {
        Self { used: [0; 2] }
    }

    pub fn contains(&self, index: usize) -> bool {
        debug_assert!(index < MAX_CELLS);
        (self.used[index / 128] & (1 << (index % 128))) != 0
    }

    /// Returns a copy with the cell at `index` marked
    #[must_use]
    pub fn with(&self, index: usize) -> Self {
        debug_assert!(index < MAX_CELLS);
        let mut tmp = *self;
        tmp.used[index / 128] |= 1 << (index % 128);
        tmp
    }

    pub fn len(&self) -> usize {
        self.used.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.used.iter().all(|&w| w == 0)
    }
}

impl std::iter::FromIterator<usize> for VisitedSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = usize>,
    {
        iter.into_iter().fold(Self::empty(), |set, i| set.with(i))
    }
}

use std::fmt;

impl fmt::Debug for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set()
            .entries((0..MAX_CELLS).filter(|&i| self.contains(i)))
            .finish()
    }
}
