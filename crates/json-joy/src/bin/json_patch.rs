//! Applies the patch given as the first argument to the JSON document on
//! stdin and prints the patched document, e.g.
//! `echo '{"a":1}' | json-patch '[{"op":"inc","path":"/a","inc":1}]'`.
//!
//! `RUST_LOG=debug` logs each patch and the operation that failed.

use std::io::{self, Write};
use std::process::ExitCode;

use json_joy::json_cli::{run, CliError, Command};

fn main() -> ExitCode {
    env_logger::init();

    let patch = std::env::args().nth(1);
    let printed = run(Command::Patch, patch.as_deref(), io::stdin().lock())
        .and_then(|doc| writeln!(io::stdout(), "{doc}").map_err(CliError::from));

    match printed {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
