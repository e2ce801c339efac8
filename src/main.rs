mod config;
mod context;
mod environment;
mod error;
mod files;
mod java;
pub mod utils;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::config::{Commands, ProgramParameters};
use crate::context::Run;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // parse args
    let args = ProgramParameters::parse();

    // init logger
    utils::logging::init(args.verbose);

    match run(&args).await {
        Ok(code) => code,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &ProgramParameters) -> anyhow::Result<ExitCode> {
    let Some(command) = &args.command else {
        println!("JavaWizard - Complete Java Development Environment Manager");
        println!("Use --help for options or try these commands:");
        println!("  java     - Manage Java versions and installations");
        println!("  process  - Process files");
        println!("  analyze  - Analyze files");
        println!("  convert  - Convert files between formats");
        return Ok(ExitCode::SUCCESS);
    };

    let ctx = args.context()?;
    debug!(
        "starting {} {} with managed root {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        ctx.paths.managed_root.display()
    );

    match command {
        Commands::Java(cmd) => cmd.run(&ctx).await,
        Commands::Process(cmd) => cmd.run(&ctx).await,
        Commands::Analyze(cmd) => cmd.run(&ctx).await,
        Commands::Convert(cmd) => cmd.run(&ctx).await,
    }
}
