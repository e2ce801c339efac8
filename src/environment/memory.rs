use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{EnvError, UserEnvironment, ValueKind};

/// In-memory environment for tests.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    user: RefCell<BTreeMap<String, (String, ValueKind)>>,
    process: BTreeMap<String, String>,
    failing_writes: BTreeSet<String>,
    writes: RefCell<Vec<String>>,
}

impl MemoryEnvironment {
    pub fn with_user(self, name: &str, value: &str) -> Self {
        self.user
            .borrow_mut()
            .insert(name.to_string(), (value.to_string(), ValueKind::Plain));
        self
    }

    pub fn with_process(mut self, name: &str, value: &str) -> Self {
        self.process.insert(name.to_string(), value.to_string());
        self
    }

    /// Every later write of `name` fails.
    pub fn failing_writes_to(mut self, name: &str) -> Self {
        self.failing_writes.insert(name.to_string());
        self
    }

    pub fn user(&self, name: &str) -> Option<String> {
        self.user.borrow().get(name).map(|(value, _)| value.clone())
    }

    pub fn user_kind(&self, name: &str) -> Option<ValueKind> {
        self.user.borrow().get(name).map(|(_, kind)| *kind)
    }

    /// Names in the order they were written.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl UserEnvironment for MemoryEnvironment {
    fn read_user_variable(&self, name: &str) -> Result<Option<String>, EnvError> {
        Ok(self.user(name))
    }

    fn write_user_variable(
        &self,
        name: &str,
        value: &str,
        kind: ValueKind,
    ) -> Result<(), EnvError> {
        if self.failing_writes.contains(name) {
            return Err(EnvError::Write {
                name: name.to_string(),
                message: "access denied".to_string(),
            });
        }
        self.writes.borrow_mut().push(name.to_string());
        self.user
            .borrow_mut()
            .insert(name.to_string(), (value.to_string(), kind));
        Ok(())
    }

    fn read_process_variable(&self, name: &str) -> Option<String> {
        self.process.get(name).cloned()
    }
}
