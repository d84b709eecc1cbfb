//! Normal forms and prime forms of pitch-class sets.
//!
//! Both forms are found by the same search: Every rotation of the sorted set is anchored at its first element, the rotations with
//! the smallest span are kept, and the most left-packed of them wins. What "left-packed" means depends on the [`Algorithm`].

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::math;
use crate::set::PcSet;

/// The tie-break policy used to pick the most left-packed ordering of a set.
///
/// Both policies agree on all but 6 of the 224 set classes (5-20, 6-Z29, 6-31, 7-Z18, 7-20 and 8-26).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Compares orderings by their intervals above the first element, starting with the *smallest* interval.
    #[default]
    Forte,
    /// Compares orderings by their intervals above the first element, starting with the *largest* interval.
    ///
    /// This is equivalent to comparing the numeric value of a bitmask where bit `pc - first` is set for every element.
    Rahn,
}

impl Algorithm {
    /// Compares two zero-anchored orderings. The smaller ordering is the more left-packed one.
    fn compare_packing(self, a: &[u8], b: &[u8]) -> Ordering {
        match self {
            Algorithm::Forte => a.cmp(b),
            Algorithm::Rahn => packing_mask(a).cmp(&packing_mask(b)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(match self {
            Algorithm::Forte => "forte",
            Algorithm::Rahn => "rahn",
        })
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forte" => Ok(Algorithm::Forte),
            "rahn" => Ok(Algorithm::Rahn),
            _ => Err(format!(
                "Unknown algorithm '{s}' (expected 'forte' or 'rahn')"
            )),
        }
    }
}

fn packing_mask(anchored: &[u8]) -> u16 {
    anchored.iter().fold(0, |mask, &interval| mask | 1 << interval)
}

/// A rotation of a sorted set, anchored at its first element.
struct Rotation {
    first: u8,
    anchored: Vec<u8>,
}

impl Rotation {
    fn span(&self) -> u8 {
        self.anchored.last().copied().unwrap_or_default()
    }
}

fn rotations(sorted: &[u8]) -> impl Iterator<Item = Rotation> + '_ {
    (0..sorted.len()).map(move |start| {
        let first = sorted[start];
        let anchored = sorted[start..]
            .iter()
            .chain(&sorted[..start])
            .map(|&pc| math::pitch_class(i32::from(pc) - i32::from(first)))
            .collect();
        Rotation { first, anchored }
    })
}

/// Finds the rotation with the smallest span. Ties are broken by `algorithm` and, if still unresolved, by the lowest first element.
fn most_packed_rotation(set: &PcSet, algorithm: Algorithm) -> Option<Rotation> {
    let sorted = set.sorted();
    rotations(sorted.pcs()).min_by(|a, b| {
        a.span()
            .cmp(&b.span())
            .then_with(|| algorithm.compare_packing(&a.anchored, &b.anchored))
    })
}

pub(crate) fn normal_form(set: &PcSet, algorithm: Algorithm) -> PcSet {
    match most_packed_rotation(set, algorithm) {
        Some(rotation) => PcSet::from_pitch_classes(
            rotation
                .anchored
                .iter()
                .map(|&interval| math::pitch_class(i32::from(rotation.first + interval))),
        ),
        None => PcSet::empty(),
    }
}

pub(crate) fn prime_form(set: &PcSet, algorithm: Algorithm) -> PcSet {
    let original = most_packed_rotation(set, algorithm);
    let inverted = most_packed_rotation(&set.invert(), algorithm);

    match (original, inverted) {
        (Some(original), Some(inverted)) => {
            let anchored = match algorithm.compare_packing(&original.anchored, &inverted.anchored)
            {
                Ordering::Greater => inverted.anchored,
                Ordering::Less | Ordering::Equal => original.anchored,
            };
            PcSet::from_pitch_classes(anchored)
        }
        _ => PcSet::empty(),
    }
}

impl PcSet {
    /// Reorders the set into its normal form (the most compact ordering of the set) using [`Algorithm::Forte`].
    ///
    /// Duplicates are removed and the pitch classes are *not* transposed.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// // The span from first to last element shrinks from 11 to 5
    /// let set = PcSet::new([10, 5, 9]);
    /// assert_eq!(set.normal_form(), PcSet::new([5, 9, 10]));
    ///
    /// // [0, 2, 4, 8] and [8, 0, 2, 4] both span 8 semitones but the former is packed more to the left
    /// let set = PcSet::new([4, 2, 0, 8]);
    /// assert_eq!(set.normal_form(), PcSet::new([0, 2, 4, 8]));
    /// ```
    ///
    /// Inversionally symmetrical sets have several equally packed orderings. In this case, the ordering starting on the lowest pitch
    /// class is chosen.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([8, 4, 0]);
    /// assert_eq!(set.normal_form(), PcSet::new([0, 4, 8]));
    /// ```
    pub fn normal_form(&self) -> PcSet {
        self.normal_form_with(Algorithm::default())
    }

    /// Like [`PcSet::normal_form`] but uses the given [`Algorithm`] to break ties.
    ///
    /// ```
    /// # use pcset::{Algorithm, PcSet};
    /// let set = PcSet::new([0, 1, 3, 7, 8]);
    /// assert_eq!(set.normal_form_with(Algorithm::Forte), PcSet::new([0, 1, 3, 7, 8]));
    /// assert_eq!(set.normal_form_with(Algorithm::Rahn), PcSet::new([7, 8, 0, 1, 3]));
    /// ```
    pub fn normal_form_with(&self, algorithm: Algorithm) -> PcSet {
        normal_form(self, algorithm)
    }

    /// Finds the prime form of the set class `self` belongs to using [`Algorithm::Forte`].
    ///
    /// The prime form is the more left-packed one of the normal forms of `self` and its inversion, transposed to start on 0.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([10, 5, 9]);
    /// assert_eq!(set.prime_form(), PcSet::new([0, 1, 5]));
    ///
    /// // Transpositions and inversions share the same prime form
    /// assert_eq!(PcSet::new([0, 1, 3, 7, 8]).prime_form(), PcSet::new([0, 1, 3, 7, 8]));
    /// assert_eq!(PcSet::new([0, 1, 5, 6, 8]).prime_form(), PcSet::new([0, 1, 3, 7, 8]));
    /// ```
    pub fn prime_form(&self) -> PcSet {
        self.prime_form_with(Algorithm::default())
    }

    /// Like [`PcSet::prime_form`] but uses the given [`Algorithm`] to break ties.
    ///
    /// ```
    /// # use pcset::{Algorithm, PcSet};
    /// let set = PcSet::new([0, 1, 3, 7, 8]);
    /// assert_eq!(set.prime_form_with(Algorithm::Rahn), PcSet::new([0, 1, 5, 6, 8]));
    /// ```
    pub fn prime_form_with(&self, algorithm: Algorithm) -> PcSet {
        prime_form(self, algorithm)
    }
}
