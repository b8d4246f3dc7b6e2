use std::fmt;

/// Well-known worker script location under the static file host.
pub const DEFAULT_WORKER_SCRIPT: &str = "/static/js/sw.js";

/// Location of the worker script as handed to the host, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPath(String);

impl ScriptPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ScriptPath {
    fn default() -> Self {
        Self(DEFAULT_WORKER_SCRIPT.to_owned())
    }
}

impl fmt::Display for ScriptPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
