//! Shorthands for transposing and inverting at the twelve fixed levels, `t0` to `t11` and `i0` to `i11`.
//!
//! ```
//! # use pcset::pcset;
//! use pcset::note::names::*;
//!
//! let set = pcset![C, D, F];
//! assert_eq!(set.t4(), pcset![E, FS, A]);
//! assert_eq!(set.i3(), pcset![EF, CS, BF]);
//! assert_eq!(set.i0(), set.invert());
//! ```

use crate::set::PcSet;

macro_rules! fixed_levels {
    ($(($level:literal, $transpose:ident, $invert:ident)),* $(,)?) => {
        impl PcSet {
            $(
                #[doc = concat!("Transposes `self` by ", stringify!($level), ", see [`PcSet::transpose`].")]
                pub fn $transpose(&self) -> PcSet {
                    self.transpose($level)
                }

                #[doc = concat!("Inverts `self` around ", stringify!($level), ", see [`PcSet::invert_about`].")]
                pub fn $invert(&self) -> PcSet {
                    self.invert_about($level)
                }
            )*
        }
    };
}

fixed_levels!(
    (0, t0, i0),
    (1, t1, i1),
    (2, t2, i2),
    (3, t3, i3),
    (4, t4, i4),
    (5, t5, i5),
    (6, t6, i6),
    (7, t7, i7),
    (8, t8, i8),
    (9, t9, i9),
    (10, t10, i10),
    (11, t11, i11),
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fixed_levels_match_general_operations() {
        let set = PcSet::new([4, 5, 8, 1]);
        let transpositions = [
            set.t0(),
            set.t1(),
            set.t2(),
            set.t3(),
            set.t4(),
            set.t5(),
            set.t6(),
            set.t7(),
            set.t8(),
            set.t9(),
            set.t10(),
            set.t11(),
        ];
        let inversions = [
            set.i0(),
            set.i1(),
            set.i2(),
            set.i3(),
            set.i4(),
            set.i5(),
            set.i6(),
            set.i7(),
            set.i8(),
            set.i9(),
            set.i10(),
            set.i11(),
        ];
        for level in 0..12 {
            assert_eq!(transpositions[level], set.transpose(level as i32));
            assert_eq!(inversions[level], set.invert_about(level as i32));
        }
    }

    #[test]
    fn t0_is_an_identity_but_i0_is_not() {
        let set = PcSet::new([4, 5, 8]);
        assert_eq!(set.t0(), set);
        assert_eq!(set.i0(), PcSet::new([8, 7, 4]));
        assert_eq!(set.t5(), PcSet::new([9, 10, 1]));
        assert_eq!(set.i5(), PcSet::new([1, 0, 9]));
    }
}
