mod analyze;
mod catalog;
mod dto;
mod error;
mod form;
mod notation;
mod set;

use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use analyze::AnalyzeOptions;
use analyze::IcvOptions;
use analyze::NameOptions;
use catalog::CatalogOptions;
use clap::Parser;
use clap::Subcommand;
pub use error::CliError;
pub use error::CliResult;
use form::NormalOptions;
use form::PrimeOptions;
use set::InvertOptions;
use set::SubsetsOptions;
use set::TransposeOptions;
use set::TransposeToOptions;

#[derive(Parser)]
#[command(name = "pcset", version, about)]
struct MainOptions {
    /// Write output to a file instead of stdout
    #[arg(long = "of")]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Transpose a set by a number of semitones
    #[command(name = "transpose")]
    Transpose(TransposeOptions),

    /// Transpose a set such that its first element becomes the target pitch class
    #[command(name = "transpose-to")]
    TransposeTo(TransposeToOptions),

    /// Invert a set about an axis or by mapping two pitch classes onto each other
    #[command(name = "invert")]
    Invert(InvertOptions),

    /// Print the normal form of a set
    #[command(name = "normal")]
    Normal(NormalOptions),

    /// Print the prime form of a set
    #[command(name = "prime")]
    Prime(PrimeOptions),

    /// Print the interval-class vector of a set
    #[command(name = "icv")]
    Icv(IcvOptions),

    /// Print the Forte name of a set
    #[command(name = "name")]
    Name(NameOptions),

    /// List the subsets of a set
    #[command(name = "subsets")]
    Subsets(SubsetsOptions),

    /// Display all descriptors of a set
    #[command(name = "analyze")]
    Analyze(AnalyzeOptions),

    /// List the set classes of the Forte catalog
    #[command(name = "catalog")]
    Catalog(CatalogOptions),
}

impl MainOptions {
    fn run(self) -> CliResult<()> {
        let stdout = io::stdout();
        let output: Box<dyn Write> = match self.output_file {
            Some(output_file) => Box::new(File::create(output_file)?),
            None => Box::new(stdout.lock()),
        };

        let mut app = App { output };

        self.command.run(&mut app)
    }
}

impl MainCommand {
    fn run(self, app: &mut App) -> CliResult<()> {
        match self {
            MainCommand::Transpose(options) => options.run(app)?,
            MainCommand::TransposeTo(options) => options.run(app)?,
            MainCommand::Invert(options) => options.run(app)?,
            MainCommand::Normal(options) => options.run(app)?,
            MainCommand::Prime(options) => options.run(app)?,
            MainCommand::Icv(options) => options.run(app)?,
            MainCommand::Name(options) => options.run(app)?,
            MainCommand::Subsets(options) => options.run(app)?,
            MainCommand::Analyze(options) => options.run(app)?,
            MainCommand::Catalog(options) => options.run(app)?,
        }
        Ok(())
    }
}

pub fn run_in_shell_env(args: impl IntoIterator<Item = String>) -> CliResult<()> {
    let options = match MainOptions::try_parse_from(args) {
        Err(err) => {
            return if err.use_stderr() {
                Err(CliError::CommandError(err.to_string()))
            } else {
                print!("{err}");
                Ok(())
            };
        }
        Ok(options) => options,
    };

    options.run()
}

struct App<'a> {
    output: Box<dyn 'a + Write>,
}

impl App<'_> {
    pub fn writeln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.output, "{message}")
    }

    pub fn write_str(&mut self, message: &str) -> io::Result<()> {
        self.output.write_all(message.as_bytes())
    }
}
