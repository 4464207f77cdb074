use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use clap::Parser;

use line_guard::checker::LineWidthChecker;
use line_guard::cli::Cli;
use line_guard::output::write_diagnostic;
use line_guard::{EXIT_ERROR, EXIT_SUCCESS, LineGuardError};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_check(&cli));
}

fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(&cli.path) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_check_impl(path: &Path) -> line_guard::Result<()> {
    let file = File::open(path).map_err(|source| LineGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let checker = LineWidthChecker::new();
    let mut stderr = io::stderr().lock();

    // lines() strips `\n` and a preceding `\r`, so a final line without a
    // terminator is measured the same as a terminated one.
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LineGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(diagnostic) = checker.check_line(path, index + 1, &line) {
            write_diagnostic(&mut stderr, &diagnostic)?;
        }
    }

    stderr.flush()?;
    Ok(())
}
