use clap::Parser;

use stng_guard::cli::{Cli, Commands};
use stng_guard::commands::{run_check, run_init, run_rules};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
