use crate::core::config::TourOptions;
use crate::demos::Demo;
use anyhow::{Result, anyhow};
use colored::Colorize;
use tracing::info;

const RULE_WIDTH: usize = 50;

/// Installs the stderr log subscriber. `RUST_LOG` narrows or widens it; the
/// floor comes from `--verbose`.
pub fn init_logging(options: &TourOptions) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(options.log_level().into()),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}

/// Prints the heading that opens every walkthrough.
pub fn section(title: &str) {
    println!("\n{}", title.cyan().bold());
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn opening_banner() {
    println!("{}", rule());
    println!("{}", "🦀 Welcome to the language tour!".bold());
    println!("{}", rule());
}

pub fn closing_banner() {
    println!("\n{}", rule());
    println!("{}", "🎉 Congratulations! You have seen the main features".green().bold());
    println!("🚀 Next, work through the walkthroughs one at a time with `run <DEMO>`");
    println!("💪 Practice a little every day and it will stick!");
    println!("{}", rule());
}

/// Runs every walkthrough once, in catalogue order, between the banners.
pub fn run_tour(options: &TourOptions) {
    info!(scratch_dir = %options.scratch_dir.display(), "starting full tour");
    opening_banner();
    for demo in Demo::ALL {
        demo.run(options);
    }
    closing_banner();
}

/// Runs a single walkthrough between the banners.
pub fn run_single(demo: Demo, options: &TourOptions) {
    info!(demo = demo.key(), "running single walkthrough");
    opening_banner();
    demo.run(options);
    closing_banner();
}

/// The catalogue as printed by `list`, one numbered line per walkthrough.
pub fn catalogue_lines() -> Vec<String> {
    Demo::ALL
        .iter()
        .enumerate()
        .map(|(index, demo)| format!("  {}. {:<12} {}", index + 1, demo.key(), demo.title()))
        .collect()
}

pub fn list_demos() {
    println!("📋 Available walkthroughs:");
    for line in catalogue_lines() {
        println!("{line}");
    }
}
