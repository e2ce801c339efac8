use std::fmt::Display;

use log::trace;
use windows_registry::CURRENT_USER;

use super::{EnvError, UserEnvironment, ValueKind};

const ENVIRONMENT_KEY: &str = "Environment";

/// Current-user environment stored under `HKCU\Environment`.
#[derive(Debug, Default, Copy, Clone)]
pub struct RegistryEnvironment;

impl UserEnvironment for RegistryEnvironment {
    fn read_user_variable(&self, name: &str) -> Result<Option<String>, EnvError> {
        let read_error = |err| read_failure(name, err);

        let key = CURRENT_USER.open(ENVIRONMENT_KEY).map_err(read_error)?;

        // value names are case-insensitive, `Path` is the usual spelling
        let Some(stored_name) = key
            .values()
            .map_err(read_error)?
            .map(|(value_name, _)| value_name)
            .find(|value_name| value_name.eq_ignore_ascii_case(name))
        else {
            return Ok(None);
        };

        key.get_string(&stored_name).map(Some).map_err(read_error)
    }

    fn write_user_variable(
        &self,
        name: &str,
        value: &str,
        kind: ValueKind,
    ) -> Result<(), EnvError> {
        let key = CURRENT_USER
            .create(ENVIRONMENT_KEY)
            .map_err(|err| write_failure(name, err))?;

        trace!("writing {name} to HKCU\\{ENVIRONMENT_KEY} as {kind:?}");
        let written = match kind {
            ValueKind::Plain => key.set_string(name, value),
            ValueKind::Expandable => key.set_expand_string(name, value),
        };
        written.map_err(|err| write_failure(name, err))
    }
}

fn read_failure(name: &str, err: impl Display) -> EnvError {
    EnvError::Read {
        name: name.to_string(),
        message: err.to_string(),
    }
}

fn write_failure(name: &str, err: impl Display) -> EnvError {
    EnvError::Write {
        name: name.to_string(),
        message: err.to_string(),
    }
}
