//! Enumeration of subsets.

use crate::set::PcSet;

impl PcSet {
    /// Returns every subset of `self`, including the empty set and the full set.
    ///
    /// Duplicates are ignored and each subset is sorted in ascending order. The subsets are ordered by their cardinality first and
    /// lexicographically second. Since a [`PcSet`] contains at most 12 distinct pitch classes, there are at most 4096 subsets.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let subsets = PcSet::new([4, 0, 7]).subsets();
    /// let subsets = subsets.iter().map(PcSet::to_string).collect::<Vec<_>>();
    ///
    /// assert_eq!(subsets, ["{}", "0", "4", "7", "04", "07", "47", "047"]);
    /// ```
    pub fn subsets(&self) -> Vec<PcSet> {
        let sorted = self.sorted();
        let num_subsets = 1u32 << sorted.len();

        let mut subsets = (0..num_subsets)
            .map(|selection| select(sorted.pcs(), selection))
            .collect::<Vec<_>>();
        subsets.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.pcs().cmp(b.pcs())));
        subsets
    }

    /// Returns every subset of `self` with exactly `size` distinct pitch classes, in lexicographic order.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let pairs = PcSet::new([0, 4, 7]).subsets_of_size(2);
    /// assert_eq!(pairs, [PcSet::new([0, 4]), PcSet::new([0, 7]), PcSet::new([4, 7])]);
    ///
    /// assert!(PcSet::new([0, 4, 7]).subsets_of_size(4).is_empty());
    /// ```
    pub fn subsets_of_size(&self, size: usize) -> Vec<PcSet> {
        let sorted = self.sorted();
        let num_subsets = 1u32 << sorted.len();

        let mut subsets = (0..num_subsets)
            .filter(|selection| selection.count_ones() as usize == size)
            .map(|selection| select(sorted.pcs(), selection))
            .collect::<Vec<_>>();
        subsets.sort();
        subsets
    }
}

/// Picks the elements whose index bit is set in `selection`.
fn select(pcs: &[u8], selection: u32) -> PcSet {
    PcSet::from_pitch_classes(
        pcs.iter()
            .enumerate()
            .filter(|&(index, _)| selection & (1 << index) != 0)
            .map(|(_, &pc)| pc),
    )
}
