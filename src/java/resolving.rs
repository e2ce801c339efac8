use std::io;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// How long a candidate `java` gets to print its banner.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// The first double-quoted token of a banner line.
/// Example: `openjdk version "17.0.8" 2023-07-18` -> captures `17.0.8`
/// Example: `java version "1.8.0_292"` -> captures `1.8.0_292`
static VERSION_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Represents errors that can occur while probing a `java` executable.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The executable could not be started or waited on.
    #[error("{0}")]
    CommandIo(#[from] io::Error),

    /// The executable did not exit within the probe timeout.
    #[error("timeout")]
    Timeout,
}

/// Runs `<executable> -version` and collects everything it prints.
///
/// `output()` drains stdout and stderr concurrently before reaping the child,
/// so a chatty JVM can never block on a full pipe. The child is killed if the
/// timeout elapses first.
pub async fn capture_version_output(
    executable: &Path,
    limit: Duration,
) -> Result<Output, ProbeError> {
    debug!("probing {}", executable.display());
    let output = tokio::process::Command::new(executable)
        .arg("-version")
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output();

    match tokio::time::timeout(limit, output).await {
        Ok(output) => Ok(output?),
        Err(_) => {
            warn!("{} did not answer within {limit:?}", executable.display());
            Err(ProbeError::Timeout)
        }
    }
}

/// Version token of the JDK that owns `executable`, wrapped in parentheses.
///
/// JDKs print their banner on stderr, so that is what gets parsed. Never
/// fails: a missing executable or unrecognised banner gives `(unknown)`, a
/// launch failure or timeout gives `(error: <message>)`.
pub async fn probe_version(executable: &Path) -> String {
    probe_version_within(executable, PROBE_TIMEOUT).await
}

pub async fn probe_version_within(executable: &Path, limit: Duration) -> String {
    if !executable.is_file() {
        return "(unknown)".to_string();
    }

    match capture_version_output(executable, limit).await {
        Ok(output) => {
            let banner = String::from_utf8_lossy(&output.stderr);
            match parse_version_token(&banner) {
                Some(version) => format!("({version})"),
                None => "(unknown)".to_string(),
            }
        }
        Err(err) => format!("(error: {err})"),
    }
}

/// Extracts the quoted version from the first line of a `-version` banner.
pub fn parse_version_token(banner: &str) -> Option<&str> {
    let first_line = banner.lines().next()?;
    VERSION_TOKEN_REGEX
        .captures(first_line)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}

/// Full `-version` banner of `executable`, or `None` when it exits unsuccessfully.
pub async fn version_banner_within(
    executable: &Path,
    limit: Duration,
) -> Result<Option<String>, ProbeError> {
    let output = capture_version_output(executable, limit).await?;
    if !output.status.success() {
        debug!("{} exited with {}", executable.display(), output.status);
        return Ok(None);
    }

    let banner = String::from_utf8_lossy(&output.stderr).trim().to_string();
    Ok(Some(banner))
}
