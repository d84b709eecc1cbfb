//! Explore pitch-class sets: normal forms, prime forms, interval-class vectors and Forte names.
//!
//! ```
//! # use pcset::{catalog, pcset, Algorithm};
//! let set = pcset![7, 8, 4, 5, 11];
//!
//! assert_eq!(set.normal_form(), pcset![4, 5, 7, 8, 11]);
//! assert_eq!(set.prime_form(), pcset![0, 1, 3, 4, 7]);
//! assert_eq!(set.prime_form_with(Algorithm::Rahn), pcset![0, 1, 3, 4, 7]);
//! assert_eq!(set.interval_class_vector().to_string(), "<213211>");
//! assert_eq!(catalog::name(&set).unwrap().name(), "5-16");
//! ```

mod form;
mod icv;
mod levels;
mod subsets;

pub mod catalog;
pub mod math;
pub mod note;
pub mod set;

pub use form::Algorithm;
pub use icv::IntervalClassVector;
pub use set::PcSet;

/// Shorthand for creating a new [`PcSet`].
///
/// ```
/// # use pcset::{pcset, PcSet};
/// assert_eq!(pcset![0, 4, 7], PcSet::new([0, 4, 7]));
/// assert_eq!(pcset![-1, 13], PcSet::new([11, 1]));
/// assert_eq!(pcset![], PcSet::empty());
///
/// // Note names
/// use pcset::note::names::*;
/// assert_eq!(pcset![C, E, G], PcSet::new([0, 4, 7]));
/// ```
#[macro_export]
macro_rules! pcset {
    () => {
        $crate::PcSet::empty()
    };
    ($($pc:expr),* $(,)?) => {
        $crate::PcSet::new([$($pc),*])
    };
}
