/*!
 * Command-line interface for sls
 */

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use sls::config::{Args, Config};
use sls::owners::SystemNames;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        generate(shell, &mut Args::command(), sls::TOOL_NAME, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = Config::from_args(args);

    let result = sls::list(&config, &SystemNames, &mut io::stdout().lock());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stdout may already be gone (e.g. a closed pipe)
            let _ = writeln!(io::stdout(), "{}", sls::diagnostic(&e));
            // Failures exit 0 unless --strict asks for the error's code.
            if config.strict_exit {
                ExitCode::from(e.exit_code())
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
