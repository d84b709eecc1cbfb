//! Allen Forte's catalog of set classes.
//!
//! The catalog maps names like `"6-Z44"` to the prime form of the respective set class. A `Z` within the name marks one of two
//! set classes sharing the same interval-class vector.
//!
//! The bundled catalog is stored in a line-oriented text format, one set class per line: `NAME:DIGITS` where `DIGITS` are the
//! pitch classes of the prime form with `T` and `E` denoting 10 and 11.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::icv::IntervalClassVector;
use crate::set;
use crate::set::PcSet;

static FORTE_CATALOG: &str = include_str!("../forte-set-classes.txt");

/// Returns the bundled catalog of all 224 set classes.
///
/// The catalog is parsed on first use and shared for the lifetime of the program.
///
/// # Panics
///
/// Panics if the bundled catalog data is corrupt. Lookups must not proceed with a corrupt catalog.
///
/// # Examples
///
/// ```
/// # use pcset::catalog;
/// # use pcset::PcSet;
/// let catalog = catalog::sets();
/// assert_eq!(catalog.len(), 224);
/// assert_eq!(catalog.get("6-Z44").unwrap().prime_form(), &PcSet::new([0, 1, 2, 5, 6, 9]));
/// ```
pub fn sets() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let catalog = FORTE_CATALOG
            .parse::<Catalog>()
            .unwrap_or_else(|err| panic!("Bundled set class catalog is corrupt: {err}"));
        log::debug!("Loaded {} set classes", catalog.len());
        catalog
    })
}

/// Finds the set class `set` belongs to in the bundled catalog.
///
/// # Examples
///
/// ```
/// # use pcset::catalog;
/// # use pcset::PcSet;
/// let set_class = catalog::name(&PcSet::new([7, 8, 4, 5, 11])).unwrap();
/// assert_eq!(set_class.name(), "5-16");
/// assert_eq!(set_class.prime_form(), &PcSet::new([0, 1, 3, 4, 7]));
/// ```
pub fn name(set: &PcSet) -> Option<&'static SetClass> {
    sets().find(set)
}

/// A named set class together with its prime form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetClass {
    name: String,
    prime_form: PcSet,
}

impl SetClass {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prime_form(&self) -> &PcSet {
        &self.prime_form
    }

    pub fn cardinality(&self) -> usize {
        self.prime_form.len()
    }

    /// Returns whether the name marks this set class as Z-related to another one.
    ///
    /// ```
    /// # use pcset::catalog;
    /// assert!(catalog::sets().get("4-Z29").unwrap().is_z_related());
    /// assert!(!catalog::sets().get("4-28").unwrap().is_z_related());
    /// ```
    pub fn is_z_related(&self) -> bool {
        self.name.contains('Z')
    }

    pub fn interval_class_vector(&self) -> IntervalClassVector {
        self.prime_form.interval_class_vector()
    }
}

impl Display for SetClass {
    /// ```
    /// # use pcset::catalog;
    /// let set_class = catalog::sets().get("5-20").unwrap();
    /// assert_eq!(set_class.to_string(), "5-20 [01378]");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(&format!("{} [{}]", self.name, self.prime_form))
    }
}

/// An immutable collection of [`SetClass`]es in catalog order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    set_classes: Vec<SetClass>,
    index_by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Imports a catalog in `NAME:DIGITS` format. Blank lines are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pcset::catalog::Catalog;
    /// # use pcset::PcSet;
    /// let input = &b"3-1:012\n\n3-2:013\n3-12:048\n"[..];
    ///
    /// let catalog = Catalog::import(input).unwrap();
    /// assert_eq!(catalog.len(), 3);
    /// assert_eq!(catalog.find(&PcSet::new([4, 0, 8])).unwrap().name(), "3-12");
    /// ```
    pub fn import(reader: impl Read) -> Result<Self, CatalogImportError> {
        let mut importer = CatalogImporter::default();
        for (line_number, line) in BufReader::new(reader).lines().enumerate() {
            importer.consume(line_number + 1, &line?)?;
        }
        Ok(importer.finalize())
    }

    pub fn len(&self) -> usize {
        self.set_classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set_classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SetClass> {
        self.set_classes.iter()
    }

    /// Looks up a set class by its name, e.g. `"6-Z44"`.
    pub fn get(&self, name: &str) -> Option<&SetClass> {
        self.index_by_name
            .get(name)
            .map(|&index| &self.set_classes[index])
    }

    /// Finds the set class whose prime form equals the prime form of `set`.
    ///
    /// A miss is logged since every set should be covered by a consistent catalog.
    pub fn find(&self, set: &PcSet) -> Option<&SetClass> {
        let prime_form = set.prime_form();
        let found = self
            .set_classes
            .iter()
            .find(|set_class| set_class.prime_form == prime_form);
        if found.is_none() {
            log::warn!("No set class found for prime form {prime_form}");
        }
        found
    }

    /// Finds the set class with the same cardinality and interval-class vector as `set_class`.
    ///
    /// ```
    /// # use pcset::catalog;
    /// let catalog = catalog::sets();
    /// let all_interval_tetrachord = catalog.get("4-Z15").unwrap();
    ///
    /// assert_eq!(catalog.z_partner(all_interval_tetrachord).unwrap().name(), "4-Z29");
    /// assert!(catalog.z_partner(catalog.get("4-28").unwrap()).is_none());
    /// ```
    pub fn z_partner(&self, set_class: &SetClass) -> Option<&SetClass> {
        let icv = set_class.interval_class_vector();
        self.set_classes.iter().find(|candidate| {
            candidate.cardinality() == set_class.cardinality()
                && candidate.prime_form != set_class.prime_form
                && candidate.interval_class_vector() == icv
        })
    }

    /// Finds the set class of the complement of `set_class`.
    ///
    /// ```
    /// # use pcset::catalog;
    /// let catalog = catalog::sets();
    ///
    /// assert_eq!(catalog.complement_of(catalog.get("5-35").unwrap()).unwrap().name(), "7-35");
    /// assert_eq!(catalog.complement_of(catalog.get("6-Z3").unwrap()).unwrap().name(), "6-Z36");
    /// assert_eq!(catalog.complement_of(catalog.get("0-1").unwrap()).unwrap().name(), "12-1");
    /// ```
    pub fn complement_of(&self, set_class: &SetClass) -> Option<&SetClass> {
        self.find(&set_class.prime_form.complement())
    }
}

impl FromStr for Catalog {
    type Err = CatalogImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Catalog::import(s.as_bytes())
    }
}

#[derive(Default)]
struct CatalogImporter {
    catalog: Catalog,
}

impl CatalogImporter {
    fn consume(&mut self, line_number: usize, line: &str) -> Result<(), CatalogImportError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let parse_error = |kind| CatalogImportError::ParseError { line_number, kind };

        let (name, digits) = line
            .split_once(':')
            .ok_or_else(|| parse_error(CatalogParseErrorKind::SeparatorMissing))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(parse_error(CatalogParseErrorKind::NameMissing));
        }

        let mut mask = 0u16;
        let mut pcs = Vec::new();
        for digit in digits.trim().chars() {
            let pc = set::digit_to_pc(digit)
                .ok_or_else(|| parse_error(CatalogParseErrorKind::InvalidDigit(digit)))?;
            if mask & (1 << pc) != 0 {
                return Err(parse_error(CatalogParseErrorKind::DuplicatePitchClass(pc)));
            }
            mask |= 1 << pc;
            pcs.push(pc);
        }

        let catalog = &mut self.catalog;
        if catalog.index_by_name.contains_key(name) {
            return Err(CatalogImportError::StructuralError(
                CatalogStructuralError::DuplicateName(name.to_owned()),
            ));
        }
        catalog
            .index_by_name
            .insert(name.to_owned(), catalog.set_classes.len());
        catalog.set_classes.push(SetClass {
            name: name.to_owned(),
            prime_form: PcSet::from_pitch_classes(pcs),
        });

        Ok(())
    }

    fn finalize(self) -> Catalog {
        self.catalog
    }
}

#[derive(Debug)]
pub enum CatalogImportError {
    IoError(io::Error),
    ParseError {
        line_number: usize,
        kind: CatalogParseErrorKind,
    },
    StructuralError(CatalogStructuralError),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogParseErrorKind {
    SeparatorMissing,
    NameMissing,
    InvalidDigit(char),
    DuplicatePitchClass(u8),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogStructuralError {
    DuplicateName(String),
}

impl Display for CatalogImportError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CatalogImportError::IoError(err) => write!(f, "Could not read catalog: {err}"),
            CatalogImportError::ParseError { line_number, kind } => {
                write!(f, "Could not parse catalog at line {line_number} ({kind})")
            }
            CatalogImportError::StructuralError(err) => write!(f, "Malformed catalog ({err})"),
        }
    }
}

impl Display for CatalogParseErrorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CatalogParseErrorKind::SeparatorMissing => {
                write!(f, "expected ':' between name and prime form")
            }
            CatalogParseErrorKind::NameMissing => write!(f, "set class name is missing"),
            CatalogParseErrorKind::InvalidDigit(digit) => {
                write!(f, "invalid pitch class digit '{digit}'")
            }
            CatalogParseErrorKind::DuplicatePitchClass(pc) => {
                write!(f, "pitch class {pc} occurs more than once")
            }
        }
    }
}

impl Display for CatalogStructuralError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CatalogStructuralError::DuplicateName(name) => {
                write!(f, "set class {name} is defined more than once")
            }
        }
    }
}

impl Error for CatalogImportError {}

impl From<io::Error> for CatalogImportError {
    fn from(v: io::Error) -> Self {
        CatalogImportError::IoError(v)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::Algorithm;

    use super::*;

    #[test]
    fn bundled_catalog_is_complete() {
        let catalog = sets();
        assert_eq!(catalog.len(), 224);

        let mut num_classes_by_cardinality = [0; 13];
        for set_class in catalog.iter() {
            num_classes_by_cardinality[set_class.cardinality()] += 1;
        }
        assert_eq!(
            num_classes_by_cardinality,
            [1, 1, 6, 12, 29, 38, 50, 38, 29, 12, 6, 1, 1]
        );
    }

    #[test]
    fn bundled_catalog_is_in_forte_prime_form() {
        for set_class in sets().iter() {
            assert_eq!(
                set_class.prime_form().prime_form(),
                *set_class.prime_form(),
                "{set_class}"
            );
        }
    }

    #[test]
    fn rahn_prime_forms_differ_for_six_set_classes() {
        let differing = sets()
            .iter()
            .filter(|set_class| {
                set_class.prime_form().prime_form_with(Algorithm::Rahn) != *set_class.prime_form()
            })
            .map(SetClass::name)
            .collect::<Vec<_>>();
        assert_eq!(differing, ["5-20", "6-Z29", "6-31", "7-Z18", "7-20", "8-26"]);
    }

    #[test]
    fn z_related_set_classes_have_partners() {
        let catalog = sets();
        for set_class in catalog.iter() {
            let partner = catalog.z_partner(set_class);
            assert_eq!(partner.is_some(), set_class.is_z_related(), "{set_class}");
            if let Some(partner) = partner {
                assert_eq!(catalog.z_partner(partner), Some(set_class));
            }
        }
    }

    #[test]
    fn complements_share_ordinal_numbers() {
        let catalog = sets();
        for set_class in catalog.iter() {
            let complement = catalog.complement_of(set_class).unwrap();
            let (cardinality, ordinal) = set_class.name().split_once('-').unwrap();
            let (complement_cardinality, complement_ordinal) =
                complement.name().split_once('-').unwrap();

            assert_eq!(
                cardinality.parse::<usize>().unwrap() + complement_cardinality.parse::<usize>().unwrap(),
                12
            );
            if cardinality != "6" {
                assert_eq!(ordinal, complement_ordinal);
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        let catalog = sets();
        assert_eq!(catalog.get("0-1").unwrap().prime_form(), &PcSet::empty());
        assert_eq!(catalog.get("12-1").unwrap().prime_form(), &PcSet::new(0..12));
        assert_eq!(
            catalog.get("6-31").unwrap().prime_form(),
            &PcSet::new([0, 1, 3, 5, 8, 9])
        );
        assert!(catalog.get("6-44").is_none());
    }

    #[test]
    fn lookup_by_set() {
        assert_eq!(name(&PcSet::empty()).unwrap().name(), "0-1");
        assert_eq!(name(&PcSet::new([3])).unwrap().name(), "1-1");
        assert_eq!(name(&PcSet::new([0, 4, 7])).unwrap().name(), "3-11");
        assert_eq!(name(&PcSet::new([0, 3, 7])).unwrap().name(), "3-11");
        assert_eq!(name(&PcSet::new([0, 1, 5, 6, 8])).unwrap().name(), "5-20");
        assert_eq!(name(&PcSet::new([5, 5, 2, 11, 8])).unwrap().name(), "4-28");
        assert_eq!(name(&PcSet::new(0..12)).unwrap().name(), "12-1");
    }

    #[test]
    fn lookup_miss_in_partial_catalog() {
        let catalog = "3-1:012".parse::<Catalog>().unwrap();
        assert!(catalog.find(&PcSet::new([0, 1, 2])).is_some());
        assert!(catalog.find(&PcSet::new([0, 4, 7])).is_none());
    }

    #[test]
    fn import_catalog_error_cases() {
        assert!(matches!(
            "3-1:012\n3-2 013".parse::<Catalog>(),
            Err(CatalogImportError::ParseError {
                line_number: 2,
                kind: CatalogParseErrorKind::SeparatorMissing
            })
        ));
        assert!(matches!(
            "3-1:012\n\n:013".parse::<Catalog>(),
            Err(CatalogImportError::ParseError {
                line_number: 3,
                kind: CatalogParseErrorKind::NameMissing
            })
        ));
        assert!(matches!(
            "3-1:01X".parse::<Catalog>(),
            Err(CatalogImportError::ParseError {
                line_number: 1,
                kind: CatalogParseErrorKind::InvalidDigit('X')
            })
        ));
        assert!(matches!(
            "3-1:0,1,2".parse::<Catalog>(),
            Err(CatalogImportError::ParseError {
                line_number: 1,
                kind: CatalogParseErrorKind::InvalidDigit(',')
            })
        ));
        assert!(matches!(
            "2-1:00".parse::<Catalog>(),
            Err(CatalogImportError::ParseError {
                line_number: 1,
                kind: CatalogParseErrorKind::DuplicatePitchClass(0)
            })
        ));
        assert!(matches!(
            "3-1:012\n3-1:013".parse::<Catalog>(),
            Err(CatalogImportError::StructuralError(
                CatalogStructuralError::DuplicateName(name)
            )) if name == "3-1"
        ));
    }

    #[test]
    fn import_digits_t_and_e() {
        let catalog = "11-1:0123456789T\n1-1:E".parse::<Catalog>().unwrap();
        assert_eq!(catalog.get("11-1").unwrap().prime_form(), &PcSet::new(0..11));
        assert_eq!(catalog.get("1-1").unwrap().prime_form(), &PcSet::new([11]));
    }

    #[test]
    fn display_errors() {
        let messages = [
            (
                "3-1:01X",
                "Could not parse catalog at line 1 (invalid pitch class digit 'X')",
            ),
            (
                "3-1:012\n3-2 013",
                "Could not parse catalog at line 2 (expected ':' between name and prime form)",
            ),
            (":012", "Could not parse catalog at line 1 (set class name is missing)"),
            (
                "2-1:00",
                "Could not parse catalog at line 1 (pitch class 0 occurs more than once)",
            ),
            (
                "3-1:012\n3-1:013",
                "Malformed catalog (set class 3-1 is defined more than once)",
            ),
        ];
        for (input, message) in messages {
            let err = input.parse::<Catalog>().unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }
}
