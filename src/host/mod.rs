//! Host environment adapter: the process-local service worker surface.
//!
//! Install semantics are host-owned: fetch the script under the document
//! root, accept it as non-empty UTF-8, and scope the registration to the
//! script's directory.

use std::{
    env,
    path::PathBuf,
    time::Duration,
};

use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::registration::RegistrationHandle,
    infra::config::HostConfig,
    usecases::register::{RegisterSourceError, ServiceWorkerHost},
};

const FORCE_UNSUPPORTED_ENV: &str = "SWREG_HOST_FORCE_UNSUPPORTED";

#[derive(Debug)]
pub struct HostAdapter {
    rt: Runtime,
    document_root: PathBuf,
    service_worker_enabled: bool,
    register_timeout: Duration,
}

impl HostAdapter {
    pub fn new(config: &HostConfig) -> Result<Self, HostInitError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HostInitError::RuntimeBuild)?;

        Ok(Self {
            rt,
            document_root: PathBuf::from(&config.document_root),
            service_worker_enabled: config.service_worker_enabled,
            register_timeout: Duration::from_millis(config.register_timeout_ms),
        })
    }

    fn resolve_script_file(&self, script_path: &str) -> PathBuf {
        self.document_root.join(script_path.trim_start_matches('/'))
    }
}

impl ServiceWorkerHost for HostAdapter {
    fn supports_service_worker(&self) -> bool {
        if env::var(FORCE_UNSUPPORTED_ENV).ok().as_deref() == Some("1") {
            return false;
        }

        self.service_worker_enabled
    }

    fn register_worker(
        &mut self,
        script_path: &str,
    ) -> Result<RegistrationHandle, RegisterSourceError> {
        check_scope(script_path)?;

        let file = self.resolve_script_file(script_path);
        let timeout = self.register_timeout;
        let raw = self
            .rt
            .block_on(async move { tokio::time::timeout(timeout, tokio::fs::read(&file)).await })
            .map_err(|_| RegisterSourceError::Timeout {
                millis: timeout.as_millis() as u64,
            })?
            .map_err(|source| RegisterSourceError::Network {
                message: format!("worker script fetch failed: {source}"),
            })?;

        parse_worker_script(&raw)?;

        Ok(RegistrationHandle {
            script: script_path.to_owned(),
            scope: scope_of(script_path),
        })
    }
}

fn check_scope(script_path: &str) -> Result<(), RegisterSourceError> {
    let rooted = script_path.starts_with('/');
    let escapes = script_path.split('/').any(|segment| segment == "..");

    if rooted && !escapes {
        Ok(())
    } else {
        Err(RegisterSourceError::ScopeViolation {
            path: script_path.to_owned(),
        })
    }
}

fn parse_worker_script(raw: &[u8]) -> Result<(), RegisterSourceError> {
    let text = std::str::from_utf8(raw).map_err(|_| RegisterSourceError::ScriptParse {
        message: "worker script is not valid UTF-8".to_owned(),
    })?;

    if text.trim().is_empty() {
        return Err(RegisterSourceError::ScriptParse {
            message: "worker script is empty".to_owned(),
        });
    }

    Ok(())
}

// Default worker scope is the script's directory.
fn scope_of(script_path: &str) -> String {
    match script_path.rfind('/') {
        Some(index) => script_path[..=index].to_owned(),
        None => "/".to_owned(),
    }
}

#[derive(Debug)]
pub enum HostInitError {
    RuntimeBuild(std::io::Error),
}

impl std::fmt::Display for HostInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuntimeBuild(source) => write!(f, "worker runtime build failed: {source}"),
        }
    }
}

impl std::error::Error for HostInitError {}

/// Returns the host module name for smoke checks.
pub fn module_name() -> &'static str {
    "host"
}
