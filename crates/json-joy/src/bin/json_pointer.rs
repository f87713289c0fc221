//! Prints the value that the pointer given as the first argument addresses
//! in the JSON document on stdin, e.g. `echo '{"a":[7]}' | json-pointer /a/0`.

use std::io::{self, Write};
use std::process::ExitCode;

use json_joy::json_cli::{run, CliError, Command};

fn main() -> ExitCode {
    env_logger::init();

    let pointer = std::env::args().nth(1);
    let printed = run(Command::Pointer, pointer.as_deref(), io::stdin().lock())
        .and_then(|value| writeln!(io::stdout(), "{value}").map_err(CliError::from));

    match printed {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("json-pointer failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
