use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project paying users via Monte Carlo resampling of historical rates
    Forecast {
        /// History YAML file with monthly observations
        #[arg(short = 'f', long)]
        history: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of simulation trials
        #[arg(short = 'n', long, default_value_t = 10000)]
        trials: usize,
        /// Number of months to project
        #[arg(short, long, default_value_t = 18)]
        months: usize,
        /// Current number of free users
        #[arg(long, default_value_t = 0)]
        free_users: i64,
        /// Current number of paying users
        #[arg(long, default_value_t = 0)]
        paying_users: i64,
        /// Random seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
