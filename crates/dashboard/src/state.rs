use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let di_container = DependenciesInject::new(config)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
