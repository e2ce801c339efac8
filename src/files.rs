mod analyze;
mod convert;
mod process;

pub use analyze::AnalyzeCommand;
pub use convert::ConvertCommand;
pub use process::ProcessCommand;

use std::path::{Path, PathBuf};

use crate::error::WizardError;

fn require_files(files: &[PathBuf], message: &str) -> Result<(), WizardError> {
    if files.is_empty() {
        return Err(WizardError::NoArguments(message.to_string()));
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
