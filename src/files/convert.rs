use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;

use super::{display_name, require_files};
use crate::context::{Context, Run};
use crate::error::WizardError;

const SUPPORTED_FORMATS: [&str; 4] = ["json", "xml", "csv", "txt"];

#[derive(Args, Debug)]
pub struct ConvertCommand {
    /// Target format (json, xml, csv, txt)
    #[arg(short = 't', long = "to")]
    target: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    overwrite: bool,

    /// Preserve original file structure
    #[arg(long)]
    preserve_structure: bool,

    /// Files to convert
    files: Vec<PathBuf>,
}

impl Run for ConvertCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        if ctx.verbose {
            println!("Converting files to: {}", self.target.to_uppercase());
            println!("Output path: {}", self.output.display());
            println!("Overwrite existing: {}", self.overwrite);
            println!("Preserve structure: {}", self.preserve_structure);
        }

        require_files(&self.files, "No files specified for conversion")?;

        let format = self.target.to_lowercase();
        if !SUPPORTED_FORMATS.contains(&format.as_str()) {
            return Err(WizardError::UnsupportedFormat(self.target.clone()).into());
        }

        for file in &self.files {
            if !file.exists() {
                eprintln!("File not found: {}", file.display());
                continue;
            }

            let output_name = output_file_name(file, &format);
            if self.output.join(&output_name).exists() && !self.overwrite {
                eprintln!("Output file exists (use --overwrite): {output_name}");
                continue;
            }

            let name = display_name(file);
            if ctx.verbose {
                println!("Converting: {name} → {output_name}");
            }
            println!("✓ Converted {name} to {}", format.to_uppercase());
        }

        println!("Conversion completed!");
        Ok(ExitCode::SUCCESS)
    }
}

/// `<stem>.<format>`; a leading dot does not start an extension.
fn output_file_name(input: &Path, format: &str) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.{format}")
}
