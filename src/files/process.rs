use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use super::{display_name, require_files};
use crate::context::{Context, Run};

#[derive(Args, Debug)]
pub struct ProcessCommand {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Processing format: cleanup, minify, format
    #[arg(short, long, default_value = "cleanup")]
    format: String,

    /// Show what would be processed without making changes
    #[arg(long)]
    dry_run: bool,

    /// Files to process
    files: Vec<PathBuf>,
}

impl Run for ProcessCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        if ctx.verbose {
            println!("Processing files with format: {}", self.format);
            println!("Output path: {}", self.output.display());
            if self.dry_run {
                println!("DRY RUN MODE - No changes will be made");
            }
        }

        require_files(&self.files, "No files specified for processing")?;

        for file in &self.files {
            if !file.exists() {
                eprintln!("File not found: {}", file.display());
                continue;
            }

            let name = display_name(file);
            if ctx.verbose || self.dry_run {
                println!("Processing: {name}");
            }
            if !self.dry_run {
                println!("✓ Processed {name} with {} format", self.format);
            }
        }

        println!("Processing completed!");
        Ok(ExitCode::SUCCESS)
    }
}
