use crate::demo::{run_demo, run_results, DemoArgs, ResultsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gpa_tracker::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GPA Tracker",
    about = "Record semester courses and compute GPA, CGPA, and degree classification",
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
    /// Compute academic results from a CSV transcript
    Results(ResultsArgs),
    /// Run an end-to-end CLI demo over a sample transcript
    Demo(DemoArgs),
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
        Command::Results(args) => run_results(args),
        Command::Demo(args) => run_demo(args),
    }
}
