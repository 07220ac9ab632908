use clap::Parser;

use bloatcheck::cli::{self, Cli, Commands, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Lint(args) => cli::run_lint(args),
        Commands::Init(args) => cli::run_init(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
