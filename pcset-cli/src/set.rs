use clap::Parser;
use pcset::PcSet;

use crate::notation::NotationOptions;
use crate::App;
use crate::CliError;
use crate::CliResult;

#[derive(Parser)]
pub(crate) struct TransposeOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,

    /// Number of semitones to transpose by
    #[arg(allow_hyphen_values = true)]
    delta: i32,

    #[command(flatten)]
    notation: NotationOptions,
}

impl TransposeOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        Ok(app.writeln(self.notation.format(&self.set.transpose(self.delta)))?)
    }
}

#[derive(Parser)]
pub(crate) struct TransposeToOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,

    /// Pitch class the first element should be moved to
    #[arg(allow_hyphen_values = true)]
    target: i32,

    #[command(flatten)]
    notation: NotationOptions,
}

impl TransposeToOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        if self.set.is_empty() {
            return Err(CliError::CommandError(
                "Cannot transpose an empty set to a target pitch class".to_owned(),
            ));
        }
        Ok(app.writeln(self.notation.format(&self.set.transpose_to(self.target)))?)
    }
}

#[derive(Parser)]
pub(crate) struct InvertOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,

    /// Inversion axis, i.e. every element e becomes AXIS - e
    #[arg(long = "axis", allow_hyphen_values = true, conflicts_with = "pair")]
    axis: Option<i32>,

    /// Two pitch classes that are swapped by the inversion, e.g. 2,9
    #[arg(long = "pair", allow_hyphen_values = true, value_parser = parse_pair)]
    pair: Option<(i32, i32)>,

    #[command(flatten)]
    notation: NotationOptions,
}

impl InvertOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let inverted = match (self.axis, self.pair) {
            (_, Some(pair)) => self.set.invert_by_pair(pair),
            (Some(axis), None) => self.set.invert_about(axis),
            (None, None) => self.set.invert(),
        };
        Ok(app.writeln(self.notation.format(&inverted))?)
    }
}

fn parse_pair(src: &str) -> Result<(i32, i32), String> {
    let error = || format!("Expected two comma-separated integers but got '{src}'");
    let (a, b) = src.split_once(',').ok_or_else(error)?;
    let a = a.trim().parse().map_err(|_| error())?;
    let b = b.trim().parse().map_err(|_| error())?;
    Ok((a, b))
}

#[derive(Parser)]
pub(crate) struct SubsetsOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,

    /// Only list subsets with the given number of pitch classes
    #[arg(long = "size")]
    size: Option<usize>,

    #[command(flatten)]
    notation: NotationOptions,
}

impl SubsetsOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let subsets = match self.size {
            Some(size) => self.set.subsets_of_size(size),
            None => self.set.subsets(),
        };
        log::debug!("Found {} subsets of {}", subsets.len(), self.set);

        for subset in subsets {
            app.writeln(self.notation.format(&subset))?;
        }
        Ok(())
    }
}
