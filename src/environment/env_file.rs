use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use tempfile::NamedTempFile;

use super::{EnvError, PATH, UserEnvironment, ValueKind};

const HEADER: &str = "# Managed by javawizard. Source this file from your shell profile.";

/// Persistent environment kept in a shell fragment owned by the tool.
///
/// Every variable is one `export NAME=...` line. Plain values are single
/// quoted so nothing is expanded; expandable values are double quoted so
/// `$VAR` references resolve when the shell sources the file. Lines the tool
/// does not recognise are kept as they are.
#[derive(Debug, Clone)]
pub struct EnvFileEnvironment {
    path: PathBuf,
}

impl EnvFileEnvironment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_owned).collect()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    fn store(&self, lines: &[String]) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        // write to a sibling temp file so a crash never leaves a half-written fragment
        let mut file = NamedTempFile::new_in(parent)?;
        for line in lines {
            writeln!(file, "{line}")?;
        }
        file.flush()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    fn diagnostic(&self, err: &io::Error) -> String {
        format!("{}: {err}", self.path().display())
    }
}

impl UserEnvironment for EnvFileEnvironment {
    fn read_user_variable(&self, name: &str) -> Result<Option<String>, EnvError> {
        let lines = self.load().map_err(|err| EnvError::Read {
            name: name.to_string(),
            message: self.diagnostic(&err),
        })?;

        let value = lines
            .iter()
            .filter_map(|line| parse_export(line))
            .filter(|(key, _)| *key == name)
            .map(|(_, value)| value)
            .last();

        // the first switch has to start from the search path the user really has
        if value.is_none() && name == PATH {
            debug!("{} has no PATH entry, using the inherited one", self.path.display());
            return Ok(self.read_process_variable(PATH));
        }

        Ok(value)
    }

    fn write_user_variable(
        &self,
        name: &str,
        value: &str,
        kind: ValueKind,
    ) -> Result<(), EnvError> {
        let write_error = |err: io::Error| EnvError::Write {
            name: name.to_string(),
            message: self.diagnostic(&err),
        };

        let mut lines = self.load().map_err(write_error)?;
        if lines.is_empty() {
            lines.push(HEADER.to_string());
        }

        let rendered = render_export(name, value, kind);
        let mut replaced = false;
        lines.retain_mut(|line| {
            let targets_name = matches!(parse_export(line), Some((key, _)) if key == name);
            if !targets_name {
                return true;
            }
            if replaced {
                return false;
            }
            *line = rendered.clone();
            replaced = true;
            true
        });
        if !replaced {
            lines.push(rendered);
        }

        trace!("writing {name} to {}", self.path.display());
        self.store(&lines).map_err(write_error)
    }

    fn activation_hint(&self) -> Option<String> {
        Some(format!(
            "Add `. \"{}\"` to your shell profile if you have not done so yet.",
            self.path().display()
        ))
    }
}

fn parse_export(line: &str) -> Option<(&str, String)> {
    let assignment = line.trim().strip_prefix("export ")?.trim_start();
    let (name, raw) = assignment.split_once('=')?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let value = if let Some(inner) = raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')) {
        inner.replace("'\\''", "'")
    } else if let Some(inner) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        unescape_double_quoted(inner)
    } else {
        raw.to_string()
    };

    Some((name, value))
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next @ ('"' | '\\' | '`')) => value.push(next),
                Some(next) => {
                    value.push('\\');
                    value.push(next);
                }
                None => value.push('\\'),
            }
        } else {
            value.push(c);
        }
    }
    value
}

fn render_export(name: &str, value: &str, kind: ValueKind) -> String {
    match kind {
        ValueKind::Plain => format!("export {name}='{}'", value.replace('\'', "'\\''")),
        ValueKind::Expandable => {
            let escaped = value
                .replace('\\', "\\\\")
                .replace('"', "\\\"")
                .replace('`', "\\`");
            format!("export {name}=\"{escaped}\"")
        }
    }
}
