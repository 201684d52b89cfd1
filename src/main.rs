// src/main.rs

use pipecheck::{cli, logging, report, run};

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("pipecheck error: {err:?}");
        std::process::exit(1);
    }

    match run(args) {
        Ok(verdict) => std::process::exit(report::exit_code(&verdict)),
        Err(err) => {
            eprintln!("pipecheck error: {err:?}");
            std::process::exit(1);
        }
    }
}
