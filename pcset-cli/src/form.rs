use clap::Args;
use clap::Parser;
use pcset::Algorithm;
use pcset::PcSet;

use crate::notation;
use crate::notation::NotationOptions;
use crate::App;
use crate::CliResult;

#[derive(Args)]
pub(crate) struct AlgorithmOptions {
    /// Tie-breaking rule for equally compact rotations [forte, rahn]
    #[arg(long = "algorithm", env = "PCSET_ALGORITHM", default_value = "forte")]
    pub algorithm: Algorithm,
}

#[derive(Parser)]
pub(crate) struct NormalOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,

    #[command(flatten)]
    algorithm: AlgorithmOptions,

    #[command(flatten)]
    notation: NotationOptions,
}

impl NormalOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let algorithm = self.algorithm.algorithm;
        log::debug!("Computing normal form of {} ({algorithm})", self.set);

        let normal_form = self.set.normal_form_with(algorithm);
        Ok(app.writeln(self.notation.format(&normal_form))?)
    }
}

#[derive(Parser)]
pub(crate) struct PrimeOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,

    #[command(flatten)]
    algorithm: AlgorithmOptions,
}

impl PrimeOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let algorithm = self.algorithm.algorithm;
        log::debug!("Computing prime form of {} ({algorithm})", self.set);

        let prime_form = self.set.prime_form_with(algorithm);
        Ok(app.writeln(notation::format_numbers(&prime_form))?)
    }
}
