use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::demo::{run_rank, RankArgs};
use crate::error::AppError;
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "talentfit",
    about = "Score and rank candidate fit against open job descriptions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the roster against a job description and print the cohort
    Rank(RankArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Assessment CSV export seeding the candidate directory
    #[arg(long)]
    pub(crate) assessments: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rank(args) => run_rank(args).await,
    }
}
