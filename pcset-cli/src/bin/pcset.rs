use std::env;
use std::io::ErrorKind;

use pcset_cli::CliError;
use pcset_cli::CliResult;

fn main() -> CliResult<()> {
    env_logger::init();

    match pcset_cli::run_in_shell_env(env::args()) {
        // The BrokenPipe case occurs when stdout tries to communicate with a process that has already terminated.
        // Since pcset is an idempotent tool with repeatable results, it is okay to ignore this error and terminate successfully.
        Err(CliError::IoError(err)) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
