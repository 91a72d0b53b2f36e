use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "errlyzer")]
#[clap(about = "AI-powered error analysis service", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
