use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use log::warn;

use super::{display_name, require_files};
use crate::context::{Context, Run};

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Generate detailed report
    #[arg(short, long)]
    report: bool,

    /// Output file for analysis results
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Analysis type: basic, detailed, security
    #[arg(long = "type", default_value = "basic")]
    analysis_type: String,

    /// Files to analyze
    files: Vec<PathBuf>,
}

impl Run for AnalyzeCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        if ctx.verbose {
            println!("Running {} analysis", self.analysis_type);
            if let Some(output) = &self.output {
                println!("Output will be saved to: {}", output.display());
            }
        }

        require_files(&self.files, "No files specified for analysis")?;

        for file in &self.files {
            let metadata = match fs::metadata(file) {
                Ok(metadata) => metadata,
                Err(err) => {
                    warn!("{}: {err}", file.display());
                    eprintln!("File not found: {}", file.display());
                    continue;
                }
            };

            println!("Analyzing: {}", display_name(file));
            println!("  Size: {} bytes", metadata.len());
            println!("  Type: {}", file_type(file));
            println!("  Readable: {}", File::open(file).is_ok());
            println!("  Writable: {}", !metadata.permissions().readonly());

            if self.report {
                println!("  ✓ Detailed report generated");
            }
        }

        println!("Analysis completed!");
        Ok(ExitCode::SUCCESS)
    }
}

/// Upper-cased extension, or `Unknown` for names without one (dotfiles included).
fn file_type(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .unwrap_or_else(|| "Unknown".to_string())
}
