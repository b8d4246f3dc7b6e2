use serde::{Deserialize, Serialize};

use crate::domain::script::DEFAULT_WORKER_SCRIPT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub worker: WorkerConfig,
    pub host: HostConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkerConfig {
    pub script_path: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            script_path: DEFAULT_WORKER_SCRIPT.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostConfig {
    pub document_root: String,
    pub service_worker_enabled: bool,
    pub register_timeout_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            document_root: ".".to_owned(),
            service_worker_enabled: true,
            register_timeout_ms: 1_500,
        }
    }
}
