//! Pitch-class sets and their elementwise transformations.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::math;
use crate::math::NUM_PITCH_CLASSES;
use crate::note::NoteName;
use crate::note::ParseNoteNameError;

/// An ordered sequence of pitch classes.
///
/// Every element is reduced to the range 0..12 on construction. The order of the elements is retained, and so are duplicates, since
/// normal forms and prime forms are specific orderings of a set. Use [`PcSet::sorted`] to compare sets by content.
///
/// # Examples
///
/// ```
/// # use pcset::PcSet;
/// let set = PcSet::new([14, -1, 7]);
/// assert_eq!(set.pcs(), [2, 11, 7]);
/// assert_eq!(set.to_string(), "2E7");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PcSet {
    pcs: Vec<u8>,
}

impl PcSet {
    pub fn new(pcs: impl IntoIterator<Item = i32>) -> Self {
        Self::from_pitch_classes(pcs.into_iter().map(math::pitch_class))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a [`PcSet`] containing every pitch class whose bit is set in `mask`, in ascending order.
    ///
    /// Bits above bit 11 are ignored.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// assert_eq!(PcSet::from_bitmask(0b1001_0001), PcSet::new([0, 4, 7]));
    /// ```
    pub fn from_bitmask(mask: u16) -> Self {
        Self::from_pitch_classes((0..NUM_PITCH_CLASSES).filter(|&pc| mask & (1 << pc) != 0))
    }

    pub(crate) fn from_pitch_classes(pcs: impl IntoIterator<Item = u8>) -> Self {
        let pcs = pcs.into_iter().collect::<Vec<_>>();
        debug_assert!(pcs.iter().all(|&pc| pc < NUM_PITCH_CLASSES));
        Self { pcs }
    }

    pub fn pcs(&self) -> &[u8] {
        &self.pcs
    }

    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    pub fn first(&self) -> Option<u8> {
        self.pcs.first().copied()
    }

    pub fn contains(&self, pc: i32) -> bool {
        self.pcs.contains(&math::pitch_class(pc))
    }

    /// The number of *distinct* pitch classes.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([0, 4, 12, 7, 4]);
    /// assert_eq!(set.len(), 5);
    /// assert_eq!(set.cardinality(), 3);
    /// ```
    pub fn cardinality(&self) -> usize {
        self.bitmask().count_ones() as usize
    }

    /// Sorts the pitch classes in ascending order and removes duplicates.
    pub fn sorted(&self) -> PcSet {
        Self::from_bitmask(self.bitmask())
    }

    /// Returns a 12-bit mask where bit `pc` is set for every pitch class `pc` contained in `self`.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// assert_eq!(PcSet::new([0, 4, 7]).bitmask(), 0b1001_0001);
    /// assert_eq!(PcSet::new([7, 4, 0, 0]).bitmask(), 0b1001_0001);
    /// ```
    pub fn bitmask(&self) -> u16 {
        self.pcs.iter().fold(0, |mask, &pc| mask | 1 << pc)
    }

    /// Transposes every element by `delta` semitones (mod 12).
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([0, 1, 2]);
    /// assert_eq!(set.transpose(3), PcSet::new([3, 4, 5]));
    /// assert_eq!(set.transpose(-5), PcSet::new([7, 8, 9]));
    /// assert_eq!(set.transpose(27), PcSet::new([3, 4, 5]));
    /// ```
    pub fn transpose(&self, delta: i32) -> PcSet {
        self.map(|pc| i32::from(pc) + delta)
    }

    /// Transposes `self` such that its first element becomes `target` (mod 12).
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([4, 7, 11]);
    /// assert_eq!(set.transpose_to(0), PcSet::new([0, 3, 7]));
    /// assert_eq!(set.transpose_to(-3), PcSet::new([9, 0, 4]));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `self` is empty since there is no first element to move.
    pub fn transpose_to(&self, target: i32) -> PcSet {
        let first = self
            .first()
            .expect("Cannot transpose an empty set to a target pitch class");
        self.transpose(target - i32::from(first))
    }

    /// Inverts every element around 0, i.e. `e` becomes `12 - e` (mod 12).
    ///
    /// The order of the elements is retained.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([1, 9, 5, 7, 6, 0, 3]);
    /// assert_eq!(set.invert(), PcSet::new([11, 3, 7, 5, 6, 0, 9]));
    /// ```
    pub fn invert(&self) -> PcSet {
        self.invert_about(0)
    }

    /// Inverts every element around `axis`, i.e. `e` becomes `axis - e` (mod 12).
    ///
    /// **NB** Unlike transposing by 0, inverting around 0 is *not* an identity function.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([1, 3, 5, 7]);
    /// assert_eq!(set.invert_about(5), PcSet::new([4, 2, 0, 10]));
    /// assert_eq!(set.invert_about(-7), PcSet::new([4, 2, 0, 10]));
    /// ```
    pub fn invert_about(&self, axis: i32) -> PcSet {
        self.map(|pc| axis - i32::from(pc))
    }

    /// Inverts `self` around the axis that maps pitch class `a` onto `b` (and vice versa).
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([7, 8, 11]);
    /// assert_eq!(set.invert_by_pair((7, 11)), PcSet::new([11, 10, 7]));
    /// assert_eq!(set.invert_by_pair((7, 11)), set.invert_about(6));
    /// ```
    pub fn invert_by_pair(&self, (a, b): (i32, i32)) -> PcSet {
        let axis = math::pitch_class(a) + math::pitch_class(b);
        self.invert_about(i32::from(axis))
    }

    /// Returns all pitch classes *not* contained in `self`, in ascending order.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([0, 2, 4, 5, 7, 9, 11]);
    /// assert_eq!(set.complement(), PcSet::new([1, 3, 6, 8, 10]));
    /// ```
    pub fn complement(&self) -> PcSet {
        Self::from_bitmask(!self.bitmask())
    }

    fn map(&self, mut f: impl FnMut(u8) -> i32) -> PcSet {
        Self::from_pitch_classes(self.pcs.iter().map(|&pc| math::pitch_class(f(pc))))
    }
}

impl Display for PcSet {
    /// Renders the set in compact digit notation where 10 and 11 are written as `T` and `E`.
    ///
    /// **NB** The sequences `[1, 0]` and `[1, 1]` render as `10` and `11`, which parse back as single pitch classes.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// assert_eq!(PcSet::new([0, 1, 3, 7, 8]).to_string(), "01378");
    /// assert_eq!(PcSet::new([10, 11, 0]).to_string(), "TE0");
    /// assert_eq!(PcSet::empty().to_string(), "{}");
    /// assert_eq!(format!("{:>7}", PcSet::new([0, 4, 7])), "    047");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.pad("{}");
        }
        let digits = self.pcs.iter().map(|&pc| pc_to_digit(pc)).collect::<String>();
        f.pad(&digits)
    }
}

impl FromStr for PcSet {
    type Err = ParsePcSetError;

    /// Parses a set from a list of integers or note names, or from compact digit notation.
    ///
    /// A single token without commas is read in compact digit notation, except for signed integers and for `10` and `11`, which
    /// denote a single pitch class. Use a trailing comma to read any other single token as an integer, e.g. `47,`. Within a list,
    /// letters are read as note names, so `0 E` contains E = 4 whereas `0E` contains 11.
    ///
    /// ```
    /// # use pcset::PcSet;
    /// // Separated integers, optionally enclosed in brackets
    /// assert_eq!("0, 4, 7".parse::<PcSet>(), Ok(PcSet::new([0, 4, 7])));
    /// assert_eq!("[-1 14 10]".parse::<PcSet>(), Ok(PcSet::new([11, 2, 10])));
    /// assert_eq!("(11,0)".parse::<PcSet>(), Ok(PcSet::new([11, 0])));
    ///
    /// // Single integers
    /// assert_eq!("10".parse::<PcSet>(), Ok(PcSet::new([10])));
    /// assert_eq!("-1".parse::<PcSet>(), Ok(PcSet::new([11])));
    /// assert_eq!("47,".parse::<PcSet>(), Ok(PcSet::new([11])));
    ///
    /// // Note names
    /// assert_eq!("C E G".parse::<PcSet>(), Ok(PcSet::new([0, 4, 7])));
    /// assert_eq!("[Bb, D, F#]".parse::<PcSet>(), Ok(PcSet::new([10, 2, 6])));
    /// assert_eq!("Eb".parse::<PcSet>(), Ok(PcSet::new([3])));
    ///
    /// // Compact digit notation
    /// assert_eq!("047".parse::<PcSet>(), Ok(PcSet::new([0, 4, 7])));
    /// assert_eq!("0TE".parse::<PcSet>(), Ok(PcSet::new([0, 10, 11])));
    /// assert_eq!("E".parse::<PcSet>(), Ok(PcSet::new([11])));
    ///
    /// // Empty set
    /// assert_eq!("{}".parse::<PcSet>(), Ok(PcSet::empty()));
    /// assert_eq!("".parse::<PcSet>(), Ok(PcSet::empty()));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = strip_brackets(s.trim()).trim();
        let tokens = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();

        match tokens.as_slice() {
            [] => Ok(PcSet::empty()),
            [token] if !s.contains(',') => parse_single_token(token),
            tokens => tokens
                .iter()
                .map(|&token| parse_element(token))
                .collect::<Result<Vec<_>, _>>()
                .map(PcSet::new),
        }
    }
}

fn parse_single_token(token: &str) -> Result<PcSet, ParsePcSetError> {
    let is_single_integer = token.starts_with(['+', '-']) || token == "10" || token == "11";
    if !is_single_integer && token.chars().all(|c| digit_to_pc(c).is_some()) {
        return Ok(PcSet::from_pitch_classes(token.chars().filter_map(digit_to_pc)));
    }
    if !is_single_integer && token.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(token
            .chars()
            .find(|&c| digit_to_pc(c).is_none())
            .map_or_else(
                || ParsePcSetError::InvalidInteger(token.to_owned()),
                ParsePcSetError::InvalidDigit,
            ));
    }
    parse_element(token).map(|pc| PcSet::new([pc]))
}

fn parse_element(token: &str) -> Result<i32, ParsePcSetError> {
    if let Ok(pc) = token.parse() {
        return Ok(pc);
    }
    if token.starts_with(|c: char| ('A'..='G').contains(&c)) {
        return token
            .parse::<NoteName>()
            .map(|note| i32::from(note.pitch_class()))
            .map_err(|err| ParsePcSetError::InvalidNoteName(token.to_owned(), err));
    }
    Err(ParsePcSetError::InvalidInteger(token.to_owned()))
}

fn strip_brackets(s: &str) -> &str {
    for (open, close) in [('[', ']'), ('(', ')'), ('{', '}')] {
        if let Some(inner) = s.strip_prefix(open).and_then(|s| s.strip_suffix(close)) {
            return inner;
        }
    }
    s
}

/// Converts a digit of the compact catalog notation into a pitch class.
///
/// `T` and `E` (in either case) denote 10 and 11.
pub(crate) fn digit_to_pc(digit: char) -> Option<u8> {
    match digit {
        '0'..='9' => digit.to_digit(10).map(|value| value as u8),
        'T' | 't' => Some(10),
        'E' | 'e' => Some(11),
        _ => None,
    }
}

pub(crate) fn pc_to_digit(pc: u8) -> char {
    match pc {
        10 => 'T',
        11 => 'E',
        other => char::from(b'0' + other),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsePcSetError {
    InvalidDigit(char),
    InvalidInteger(String),
    InvalidNoteName(String, ParseNoteNameError),
}

impl Display for ParsePcSetError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParsePcSetError::InvalidDigit(digit) => write!(
                f,
                "Invalid pitch class digit '{digit}' (expected 0-9, T or E)"
            ),
            ParsePcSetError::InvalidInteger(token) => write!(
                f,
                "Invalid pitch class '{token}' (expected an integer or a note name)"
            ),
            ParsePcSetError::InvalidNoteName(token, err) => {
                write!(f, "Invalid note name '{token}' ({err})")
            }
        }
    }
}

impl Error for ParsePcSetError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn construction_reduces_mod_12() {
        let set = PcSet::new([-25, -12, -1, 0, 11, 12, 23, 100]);
        assert_eq!(set.pcs(), [11, 0, 11, 0, 11, 0, 11, 4]);
    }

    #[test]
    fn transposition_is_reversible() {
        let set = PcSet::new([1, 9, 5, 7, 6, 0, 3]);
        for delta in -30..30 {
            assert_eq!(set.transpose(delta).transpose(-delta), set);
        }
    }

    #[test]
    fn transposition_keeps_order_and_duplicates() {
        let set = PcSet::new([9, 2, 2, 11]);
        assert_eq!(set.transpose(2), PcSet::new([11, 4, 4, 1]));
    }

    #[test]
    fn transpose_to_moves_first_element() {
        let set = PcSet::new([5, 1, 8]);
        for target in -15..15 {
            let transposed = set.transpose_to(target);
            assert_eq!(transposed.first(), Some(math::pitch_class(target)));
            assert_eq!(transposed.transpose_to(5), set);
        }
    }

    #[test]
    #[should_panic(expected = "Cannot transpose an empty set")]
    fn transpose_empty_set_to_target() {
        PcSet::empty().transpose_to(3);
    }

    #[test]
    fn inversion_is_an_involution() {
        let set = PcSet::new([1, 9, 5, 7, 6, 0, 3]);
        assert_eq!(set.invert().invert(), set);
        for axis in 0..12 {
            assert_eq!(set.invert_about(axis).invert_about(axis), set);
        }
    }

    #[test]
    fn i0_is_not_an_identity() {
        let set = PcSet::new([7, 8, 11]);
        assert_eq!(set.invert(), PcSet::new([5, 4, 1]));
    }

    #[test]
    fn inverting_by_a_pair_swaps_the_pair() {
        let set = PcSet::new([0, 1, 2, 5]);
        let inverted = set.invert_by_pair((0, 1));
        assert_eq!(inverted, PcSet::new([1, 0, 11, 8]));
        assert_eq!(inverted, set.invert_about(1));
    }

    #[test]
    fn empty_set_operations() {
        let empty = PcSet::empty();
        assert_eq!(empty.transpose(5), empty);
        assert_eq!(empty.invert(), empty);
        assert_eq!(empty.invert_by_pair((3, 4)), empty);
        assert_eq!(empty.complement(), PcSet::new(0..12));
        assert_eq!(empty.cardinality(), 0);
    }

    #[test]
    fn complement_of_aggregate() {
        assert_eq!(PcSet::new(0..12).complement(), PcSet::empty());
    }

    #[test]
    fn sorted_removes_duplicates() {
        let set = PcSet::new([7, 4, 19, 0, 4]);
        assert_eq!(set.sorted(), PcSet::new([0, 4, 7]));
    }

    #[test]
    fn parse_error_cases() {
        assert_eq!(
            "01x".parse::<PcSet>(),
            Err(ParsePcSetError::InvalidDigit('x'))
        );
        assert_eq!(
            "0, 1, x".parse::<PcSet>(),
            Err(ParsePcSetError::InvalidInteger("x".to_owned()))
        );
        assert_eq!(
            "0 T".parse::<PcSet>(),
            Err(ParsePcSetError::InvalidInteger("T".to_owned()))
        );
    }

    #[test]
    fn parse_single_integers() {
        assert_eq!("10".parse::<PcSet>(), Ok(PcSet::new([10])));
        assert_eq!("11".parse::<PcSet>(), Ok(PcSet::new([11])));
        assert_eq!("-1".parse::<PcSet>(), Ok(PcSet::new([11])));
        assert_eq!("+14".parse::<PcSet>(), Ok(PcSet::new([2])));
        assert_eq!("[-13]".parse::<PcSet>(), Ok(PcSet::new([11])));
        assert_eq!("11,".parse::<PcSet>(), Ok(PcSet::new([11])));
        assert_eq!("25,".parse::<PcSet>(), Ok(PcSet::new([1])));
        assert_eq!(
            "-x".parse::<PcSet>(),
            Err(ParsePcSetError::InvalidInteger("-x".to_owned()))
        );
    }

    #[test]
    fn parse_compact_tokens() {
        assert_eq!("01".parse::<PcSet>(), Ok(PcSet::new([0, 1])));
        assert_eq!("12".parse::<PcSet>(), Ok(PcSet::new([1, 2])));
        assert_eq!("te".parse::<PcSet>(), Ok(PcSet::new([10, 11])));
        assert_eq!("4578E".parse::<PcSet>(), Ok(PcSet::new([4, 5, 7, 8, 11])));
    }

    #[test]
    fn parse_note_names() {
        assert_eq!("C E G".parse::<PcSet>(), Ok(PcSet::new([0, 4, 7])));
        assert_eq!("Cs, F, Fs, G".parse::<PcSet>(), Ok(PcSet::new([1, 5, 6, 7])));
        assert_eq!("Bff Css 3".parse::<PcSet>(), Ok(PcSet::new([9, 2, 3])));
        assert_eq!("C".parse::<PcSet>(), Ok(PcSet::new([0])));
        assert_eq!("F#".parse::<PcSet>(), Ok(PcSet::new([6])));
        assert_eq!(
            "C H".parse::<PcSet>(),
            Err(ParsePcSetError::InvalidInteger("H".to_owned()))
        );
        assert_eq!(
            "C, Ebbb".parse::<PcSet>(),
            Err(ParsePcSetError::InvalidNoteName(
                "Ebbb".to_owned(),
                ParseNoteNameError::TooManyAccidentals
            ))
        );
        assert_eq!(
            "CEG".parse::<PcSet>(),
            Err(ParsePcSetError::InvalidNoteName(
                "CEG".to_owned(),
                ParseNoteNameError::InvalidAccidental('E')
            ))
        );
    }

    #[test]
    fn display_and_parse_agree() {
        for mask in 0..4096 {
            let set = PcSet::from_bitmask(mask);
            assert_eq!(set.to_string().parse::<PcSet>(), Ok(set));
        }
    }
}
