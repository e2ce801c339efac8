use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::context::Context;
use crate::environment::platform_environment;
use crate::error::WizardError;
use crate::files::{AnalyzeCommand, ConvertCommand, ProcessCommand};
use crate::java::Paths;
use crate::java::commands::JavaCommand;

#[derive(Parser, Debug)]
#[command(name = "javawizard", version)]
#[command(about = "JavaWizard - Complete Java Development Environment Manager")]
pub struct ProgramParameters {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base directory of the tool; managed JDKs live in its `java-versions` folder
    #[arg(long, global = true, env = "JAVAWIZARD_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Java versions and installations
    Java(JavaCommand),

    /// Process files with various operations like cleanup, formatting, etc.
    Process(ProcessCommand),

    /// Analyze file contents, structure, and properties
    Analyze(AnalyzeCommand),

    /// Convert files between different formats
    Convert(ConvertCommand),
}

impl ProgramParameters {
    /// Resolves the tool home and platform layout for the commands.
    pub fn context(&self) -> Result<Context, WizardError> {
        let user_home = dirs::home_dir();

        let tool_home = match (&self.home, &user_home) {
            (Some(home), _) => std::path::absolute(home).map_err(|err| {
                WizardError::Config(format!("Invalid home directory {}: {err}", home.display()))
            })?,
            (None, Some(user_home)) => user_home.join(".javawizard"),
            (None, None) => {
                return Err(WizardError::Config(
                    "Failed to find the user home directory (hint: set `JAVAWIZARD_HOME`)"
                        .to_string(),
                ));
            }
        };

        let paths = Paths::detect(&tool_home, user_home.as_deref().unwrap_or(&tool_home));
        Ok(Context {
            env: platform_environment(&tool_home),
            paths,
            verbose: self.verbose,
        })
    }
}
