use crate::{host::HostAdapter, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub host: HostAdapter,
}

impl AppContext {
    pub fn new(config: AppConfig, host: HostAdapter) -> Self {
        Self { config, host }
    }
}
