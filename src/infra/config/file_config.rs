use serde::Deserialize;

use crate::infra::config::{AppConfig, HostConfig, LogConfig, WorkerConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub worker: Option<FileWorkerConfig>,
    pub host: Option<FileHostConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(worker) = self.worker {
            worker.merge_into(&mut config.worker);
        }

        if let Some(host) = self.host {
            host.merge_into(&mut config.host);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileWorkerConfig {
    pub script_path: Option<String>,
}

impl FileWorkerConfig {
    fn merge_into(self, config: &mut WorkerConfig) {
        if let Some(script_path) = self.script_path {
            config.script_path = script_path;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileHostConfig {
    pub document_root: Option<String>,
    pub service_worker_enabled: Option<bool>,
    pub register_timeout_ms: Option<u64>,
}

impl FileHostConfig {
    fn merge_into(self, config: &mut HostConfig) {
        if let Some(document_root) = self.document_root {
            config.document_root = document_root;
        }

        if let Some(enabled) = self.service_worker_enabled {
            config.service_worker_enabled = enabled;
        }

        if let Some(timeout_ms) = self.register_timeout_ms {
            config.register_timeout_ms = timeout_ms;
        }
    }
}
