use crate::structs::cli::Cli;
use clap::Parser;
use crate::workers::command_runner::CommandRunner;

mod structs;
mod services;
mod server;
mod helpers;
mod enums;
mod errors;
mod prompts;
mod config;
mod traits;
mod workers;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();
    runner.run_command(cli.command).await?;
    Ok(())
}
