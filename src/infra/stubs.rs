#[cfg(test)]
use anyhow::Result;

#[cfg(test)]
use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}
