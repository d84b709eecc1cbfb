use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use pcset::catalog;
use pcset::catalog::Catalog;
use pcset::catalog::CatalogImportError;
use pcset::catalog::SetClass;

use crate::dto;
use crate::dto::SetClassDto;
use crate::notation;
use crate::App;
use crate::CliError;
use crate::CliResult;

#[derive(Parser)]
pub(crate) struct CatalogOptions {
    /// Only list set classes with the given number of pitch classes
    #[arg(long = "size")]
    size: Option<usize>,

    /// Read the catalog from a file in NAME:DIGITS format instead of using the bundled one
    #[arg(long = "file")]
    file: Option<PathBuf>,

    /// Print the catalog in YAML format
    #[arg(long = "yaml")]
    yaml: bool,
}

impl CatalogOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let imported;
        let catalog = match &self.file {
            Some(file_name) => {
                imported = File::open(file_name)
                    .map_err(CatalogImportError::from)
                    .and_then(Catalog::import)
                    .map_err(|err| CliError::CatalogFileError {
                        file_name: file_name.clone(),
                        err,
                    })?;
                log::info!(
                    "Imported {} set classes from {}",
                    imported.len(),
                    file_name.display()
                );
                &imported
            }
            None => catalog::sets(),
        };

        let set_classes = catalog
            .iter()
            .filter(|set_class| self.size.is_none_or(|size| set_class.cardinality() == size))
            .collect::<Vec<_>>();

        if self.yaml {
            let dtos = set_classes
                .into_iter()
                .map(SetClassDto::from_set_class)
                .collect::<Vec<_>>();
            return Ok(app.write_str(&dto::to_yaml(&dtos)?)?);
        }

        for set_class in set_classes {
            print_set_class(app, set_class)?;
        }
        Ok(())
    }
}

fn print_set_class(app: &mut App, set_class: &SetClass) -> CliResult<()> {
    Ok(app.writeln(format_args!(
        "{:<7}{:<15}{}",
        set_class.name(),
        notation::format_compact(set_class.prime_form()),
        set_class.interval_class_vector()
    ))?)
}
