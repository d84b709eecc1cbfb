use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::PathBuf;

use pcset::catalog::CatalogImportError;

pub type CliResult<T> = Result<T, CliError>;

pub enum CliError {
    IoError(io::Error),
    CatalogFileError {
        file_name: PathBuf,
        err: CatalogImportError,
    },
    YamlError(serde_yaml::Error),
    CommandError(String),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(err) => write!(f, "IO error / {err}"),
            CliError::CatalogFileError { file_name, err } => {
                write!(f, "Could not load {} / {err}", file_name.display())
            }
            CliError::YamlError(err) => write!(f, "Could not render YAML / {err}"),
            CliError::CommandError(err) => write!(f, "The command failed / {err}"),
        }
    }
}

impl From<String> for CliError {
    fn from(v: String) -> Self {
        CliError::CommandError(v)
    }
}

impl From<io::Error> for CliError {
    fn from(v: io::Error) -> Self {
        CliError::IoError(v)
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(v: serde_yaml::Error) -> Self {
        CliError::YamlError(v)
    }
}
