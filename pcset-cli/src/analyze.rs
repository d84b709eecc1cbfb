use std::fmt::Display;

use clap::Parser;
use pcset::catalog;
use pcset::catalog::SetClass;
use pcset::Algorithm;
use pcset::IntervalClassVector;
use pcset::PcSet;

use crate::dto;
use crate::dto::AnalysisDto;
use crate::form::AlgorithmOptions;
use crate::notation;
use crate::notation::NotationOptions;
use crate::App;
use crate::CliError;
use crate::CliResult;

#[derive(Parser)]
pub(crate) struct IcvOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,
}

impl IcvOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        Ok(app.writeln(self.set.interval_class_vector())?)
    }
}

#[derive(Parser)]
pub(crate) struct NameOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,
}

impl NameOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let set_class = catalog::name(&self.set).ok_or_else(|| {
            CliError::CommandError(format!("No set class found for {}", self.set))
        })?;
        Ok(app.writeln(set_class)?)
    }
}

#[derive(Parser)]
pub(crate) struct AnalyzeOptions {
    /// Pitch-class set, e.g. 0,4,7, 047 or "C E G"
    #[arg(allow_hyphen_values = true)]
    set: PcSet,

    /// Print the analysis in YAML format
    #[arg(long = "yaml")]
    yaml: bool,

    #[command(flatten)]
    algorithm: AlgorithmOptions,

    #[command(flatten)]
    notation: NotationOptions,
}

impl AnalyzeOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let analysis = Analysis::of(&self.set, self.algorithm.algorithm);

        if self.yaml {
            return Ok(app.write_str(&dto::to_yaml(&analysis.to_dto(&self.set))?)?);
        }

        let algorithm = analysis.algorithm;
        print_row(app, "Set:", self.notation.format(&self.set))?;
        print_row(
            app,
            &format!("Normal form ({algorithm}):"),
            self.notation.format(&analysis.normal_form),
        )?;
        print_row(
            app,
            &format!("Prime form ({algorithm}):"),
            notation::format_numbers(&analysis.prime_form),
        )?;
        print_row(app, "Interval-class vector:", analysis.icv)?;
        print_row(app, "Forte name:", name_or_dash(analysis.set_class))?;
        print_row(app, "Z-partner:", name_or_dash(analysis.z_partner))?;
        print_row(app, "Complement:", name_or_dash(analysis.complement))?;

        Ok(())
    }
}

struct Analysis {
    algorithm: Algorithm,
    normal_form: PcSet,
    prime_form: PcSet,
    icv: IntervalClassVector,
    set_class: Option<&'static SetClass>,
    z_partner: Option<&'static SetClass>,
    complement: Option<&'static SetClass>,
}

impl Analysis {
    fn of(set: &PcSet, algorithm: Algorithm) -> Self {
        log::debug!("Analyzing {set} ({algorithm})");

        let catalog = catalog::sets();
        let set_class = catalog.find(set);

        Self {
            algorithm,
            normal_form: set.normal_form_with(algorithm),
            prime_form: set.prime_form_with(algorithm),
            icv: set.interval_class_vector(),
            set_class,
            z_partner: set_class.and_then(|set_class| catalog.z_partner(set_class)),
            complement: set_class.and_then(|set_class| catalog.complement_of(set_class)),
        }
    }

    fn to_dto(&self, set: &PcSet) -> AnalysisDto {
        let name = |set_class: Option<&SetClass>| {
            set_class.map(|set_class| set_class.name().to_owned())
        };

        AnalysisDto {
            set: dto::pcs(set),
            algorithm: self.algorithm.to_string(),
            normal_form: dto::pcs(&self.normal_form),
            prime_form: dto::pcs(&self.prime_form),
            interval_class_vector: self.icv.counts(),
            forte_name: name(self.set_class),
            z_partner: name(self.z_partner),
            complement: name(self.complement),
        }
    }
}

fn print_row(app: &mut App, label: &str, value: impl Display) -> CliResult<()> {
    Ok(app.writeln(format_args!("{label:<23}{value}"))?)
}

fn name_or_dash(set_class: Option<&SetClass>) -> &str {
    set_class.map_or("-", SetClass::name)
}
