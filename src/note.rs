//! Note names of pitch classes, assuming C = 0.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::math;
use crate::set::PcSet;

/// A pitch class rendered as a note name.
///
/// Black keys are spelled with sharps, flats or both depending on the sign flag of the format string.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NoteName {
    pc: u8,
}

impl NoteName {
    pub fn from_pitch_class(pc: i32) -> Self {
        Self {
            pc: math::pitch_class(pc),
        }
    }

    pub fn pitch_class(self) -> u8 {
        self.pc
    }
}

impl Display for NoteName {
    /// ```
    /// # use pcset::note::NoteName;
    /// assert_eq!(NoteName::from_pitch_class(0).to_string(), "C");
    /// assert_eq!(NoteName::from_pitch_class(1).to_string(), "C#/Db");
    /// assert_eq!(NoteName::from_pitch_class(11).to_string(), "B");
    /// assert_eq!(NoteName::from_pitch_class(-2).to_string(), "A#/Bb");
    ///
    /// // Format flags
    /// assert_eq!(format!("{:+}", NoteName::from_pitch_class(10)), "A#");
    /// assert_eq!(format!("{:-}", NoteName::from_pitch_class(10)), "Bb");
    /// assert_eq!(format!("{:+}", NoteName::from_pitch_class(9)), "A");
    /// assert_eq!(format!("{:7}", NoteName::from_pitch_class(6)), "F#/Gb  ");
    /// assert_eq!(format!("{:>4}", NoteName::from_pitch_class(3)), "D#/Eb");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(note_name(self.pc, Spelling::from_formatter(f)))
    }
}

impl FromStr for NoteName {
    type Err = ParseNoteNameError;

    /// Parses a letter from `A` to `G` followed by up to two sharps or flats.
    ///
    /// Sharps are written as `#`, `s` or `♯`, flats as `b`, `f` or `♭`. `x` and `𝄪` denote a double sharp, `𝄫` a double flat.
    ///
    /// ```
    /// # use pcset::note::NoteName;
    /// assert_eq!("C".parse::<NoteName>().map(NoteName::pitch_class), Ok(0));
    /// assert_eq!("F#".parse::<NoteName>().map(NoteName::pitch_class), Ok(6));
    /// assert_eq!("Gf".parse::<NoteName>().map(NoteName::pitch_class), Ok(6));
    /// assert_eq!("B♯".parse::<NoteName>().map(NoteName::pitch_class), Ok(0));
    /// assert_eq!("Cf".parse::<NoteName>().map(NoteName::pitch_class), Ok(11));
    /// assert_eq!("Css".parse::<NoteName>().map(NoteName::pitch_class), Ok(2));
    /// assert_eq!("Bbb".parse::<NoteName>().map(NoteName::pitch_class), Ok(9));
    /// assert_eq!("Fx".parse::<NoteName>().map(NoteName::pitch_class), Ok(7));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        let natural = match chars.next() {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            Some(other) => return Err(ParseNoteNameError::InvalidLetter(other)),
            None => return Err(ParseNoteNameError::Empty),
        };

        let mut alteration = 0i32;
        for accidental in chars {
            let step: i32 = match accidental {
                '#' | 's' | '♯' => 1,
                'b' | 'f' | '♭' => -1,
                'x' | '𝄪' => 2,
                '𝄫' => -2,
                other => return Err(ParseNoteNameError::InvalidAccidental(other)),
            };
            if alteration != 0 && alteration.signum() != step.signum() {
                return Err(ParseNoteNameError::MixedAccidentals);
            }
            alteration += step;
            if alteration.abs() > 2 {
                return Err(ParseNoteNameError::TooManyAccidentals);
            }
        }

        Ok(NoteName::from_pitch_class(natural + alteration))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseNoteNameError {
    Empty,
    InvalidLetter(char),
    InvalidAccidental(char),
    MixedAccidentals,
    TooManyAccidentals,
}

impl Display for ParseNoteNameError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParseNoteNameError::Empty => write!(f, "Note name is empty"),
            ParseNoteNameError::InvalidLetter(letter) => {
                write!(f, "Invalid note letter '{letter}' (expected A-G)")
            }
            ParseNoteNameError::InvalidAccidental(accidental) => {
                write!(f, "Invalid accidental '{accidental}'")
            }
            ParseNoteNameError::MixedAccidentals => {
                write!(f, "Sharps and flats cannot be combined")
            }
            ParseNoteNameError::TooManyAccidentals => {
                write!(f, "At most a double sharp or a double flat is allowed")
            }
        }
    }
}

impl Error for ParseNoteNameError {}

#[derive(Copy, Clone, Debug)]
enum Spelling {
    Sharp,
    Flat,
    Both,
}

impl Spelling {
    fn from_formatter(f: &Formatter) -> Self {
        match (f.sign_plus(), f.sign_minus()) {
            (true, false) => Spelling::Sharp,
            (false, true) => Spelling::Flat,
            _ => Spelling::Both,
        }
    }
}

fn note_name(pc: u8, spelling: Spelling) -> &'static str {
    match (pc, spelling) {
        (0, _) => "C",
        (1, Spelling::Sharp) => "C#",
        (1, Spelling::Flat) => "Db",
        (1, _) => "C#/Db",
        (2, _) => "D",
        (3, Spelling::Sharp) => "D#",
        (3, Spelling::Flat) => "Eb",
        (3, _) => "D#/Eb",
        (4, _) => "E",
        (5, _) => "F",
        (6, Spelling::Sharp) => "F#",
        (6, Spelling::Flat) => "Gb",
        (6, _) => "F#/Gb",
        (7, _) => "G",
        (8, Spelling::Sharp) => "G#",
        (8, Spelling::Flat) => "Ab",
        (8, _) => "G#/Ab",
        (9, _) => "A",
        (10, Spelling::Sharp) => "A#",
        (10, Spelling::Flat) => "Bb",
        (10, _) => "A#/Bb",
        (11, _) => "B",
        (other, _) => unreachable!("value was {}", other),
    }
}

/// The note names of a [`PcSet`], separated by spaces.
///
/// Created by [`PcSet::note_names`]. The sign flag of the format string is applied to every note.
#[derive(Copy, Clone, Debug)]
pub struct NoteNames<'a> {
    set: &'a PcSet,
}

impl Display for NoteNames<'_> {
    /// ```
    /// # use pcset::PcSet;
    /// let set = PcSet::new([1, 5, 8]);
    /// assert_eq!(set.note_names().to_string(), "C#/Db F G#/Ab");
    /// assert_eq!(format!("{:+}", set.note_names()), "C# F G#");
    /// assert_eq!(format!("{:-}", set.note_names()), "Db F Ab");
    /// assert_eq!(PcSet::empty().note_names().to_string(), "");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let spelling = Spelling::from_formatter(f);
        let names = self
            .set
            .pcs()
            .iter()
            .map(|&pc| note_name(pc, spelling))
            .collect::<Vec<_>>();
        f.pad(&names.join(" "))
    }
}

impl PcSet {
    pub fn note_names(&self) -> NoteNames<'_> {
        NoteNames { set: self }
    }
}

/// Pitch classes by note name, for use with [`pcset!`](crate::pcset).
///
/// Sharps are suffixed with `S`, flats with `F`. Doubled suffixes denote double sharps and double flats.
///
/// ```
/// # use pcset::pcset;
/// use pcset::note::names::*;
///
/// assert_eq!(pcset![C, E, G], pcset![0, 4, 7]);
/// assert_eq!(pcset![CS, F, FS, G].prime_form(), pcset![0, 1, 2, 6]);
/// assert_eq!(pcset![BS, DFF, CF], pcset![0, 0, 11]);
/// ```
pub mod names {
    pub const CF: i32 = -1;
    pub const C: i32 = 0;
    pub const CS: i32 = 1;
    pub const CSS: i32 = 2;

    pub const DFF: i32 = 0;
    pub const DF: i32 = 1;
    pub const D: i32 = 2;
    pub const DS: i32 = 3;
    pub const DSS: i32 = 4;

    pub const EFF: i32 = 2;
    pub const EF: i32 = 3;
    pub const E: i32 = 4;
    pub const ES: i32 = 5;

    pub const FF: i32 = 4;
    pub const F: i32 = 5;
    pub const FS: i32 = 6;
    pub const FSS: i32 = 7;

    pub const GFF: i32 = 5;
    pub const GF: i32 = 6;
    pub const G: i32 = 7;
    pub const GS: i32 = 8;
    pub const GSS: i32 = 9;

    pub const AFF: i32 = 7;
    pub const AF: i32 = 8;
    pub const A: i32 = 9;
    pub const AS: i32 = 10;
    pub const ASS: i32 = 11;

    pub const BFF: i32 = 9;
    pub const BF: i32 = 10;
    pub const B: i32 = 11;
    pub const BS: i32 = 12;
}
