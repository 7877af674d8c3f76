use crate::commands::{run_authorize, run_report, run_roster, AuthorizeArgs, ReportArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use home_study::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Home Study Tracker",
    about = "Track students under the home-study regime from the command line",
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
    /// Print the ordered roster with lifecycle status for each student
    Roster(RosterArgs),
    /// Print the printable materials report for one student
    Report(ReportArgs),
    /// Show the navigation decision for a role and view path
    Authorize(AuthorizeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster(args) => run_roster(args),
        Command::Report(args) => run_report(args),
        Command::Authorize(args) => {
            run_authorize(args);
            Ok(())
        }
    }
}
