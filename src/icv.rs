//! Interval-class content of pitch-class sets.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::math;
use crate::set::PcSet;

/// Counts of the interval classes 1 to 6 among all unordered pairs of a set's prime form.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct IntervalClassVector {
    counts: [u8; 6],
}

impl IntervalClassVector {
    pub fn from_counts(counts: [u8; 6]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> [u8; 6] {
        self.counts
    }

    /// Returns the number of occurrences of `interval_class`.
    ///
    /// # Panics
    ///
    /// Panics if `interval_class` is not between 1 and 6.
    pub fn count_of(&self, interval_class: u8) -> u8 {
        assert!(
            (1..=6).contains(&interval_class),
            "Interval class must be between 1 and 6 but was {interval_class}"
        );
        self.counts[usize::from(interval_class - 1)]
    }

    /// The total number of pairs, i.e. `n * (n - 1) / 2` for a set of cardinality `n`.
    pub fn num_pairs(&self) -> u32 {
        self.counts.iter().copied().map(u32::from).sum()
    }
}

impl Display for IntervalClassVector {
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([0, 4, 7]);
    /// assert_eq!(set.interval_class_vector().to_string(), "<001110>");
    ///
    /// // Counts above 9 are separated by commas
    /// let set = PcSet::new(0..12);
    /// assert_eq!(set.interval_class_vector().to_string(), "<12,12,12,12,12,6>");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let separator = if self.counts.iter().all(|&count| count < 10) {
            ""
        } else {
            ","
        };
        let counts = self
            .counts
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(separator);
        f.pad(&format!("<{counts}>"))
    }
}

impl PcSet {
    /// Computes the interval-class vector of `self`.
    ///
    /// The intervals are counted within the prime form of `self`, i.e. duplicate pitch classes are not counted twice.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([0, 1, 3, 7, 8]);
    /// assert_eq!(set.interval_class_vector().counts(), [2, 1, 1, 2, 3, 1]);
    ///
    /// let set = PcSet::new([0, 0, 4, 4]);
    /// assert_eq!(set.interval_class_vector().counts(), [0, 0, 0, 1, 0, 0]);
    /// ```
    pub fn interval_class_vector(&self) -> IntervalClassVector {
        let mut counts = [0; 6];
        for pair in self.prime_form().subsets_of_size(2) {
            if let &[a, b] = pair.pcs() {
                counts[usize::from(math::interval_class(a, b) - 1)] += 1;
            }
        }
        IntervalClassVector { counts }
    }
}
