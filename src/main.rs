mod commands;
mod domain;
mod services;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::forecast_cmd::forecast_command;
use clap::{CommandFactory, Parser};

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Forecast { .. } => forecast_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }
}
