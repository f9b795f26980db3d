//! A sequential walkthrough of introductory language features. Running the
//! binary with no arguments prints the whole tour; `list` shows what is
//! available and `run <DEMO>` replays a single walkthrough.
use anyhow::Result;
use clap::{Parser, Subcommand};
use language_tour::core::config::TourOptions;
use language_tour::demos::Demo;
use language_tour::utils;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "language-tour")]
#[command(about = "A guided tour of introductory language features")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory in which the file walkthrough creates its scratch file
    #[arg(long, global = true, value_name = "DIR")]
    scratch_dir: Option<PathBuf>,

    /// Log walkthrough progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available walkthroughs
    List,
    /// Run a single walkthrough
    Run {
        /// Which walkthrough to run
        #[arg(value_enum)]
        demo: Demo,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = TourOptions::new(cli.scratch_dir, cli.verbose);
    utils::init_logging(&options)?;

    match cli.command {
        None => utils::run_tour(&options),
        Some(Commands::List) => utils::list_demos(),
        Some(Commands::Run { demo }) => utils::run_single(demo, &options),
    }
    Ok(())
}
