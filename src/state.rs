use crate::config::AppConfig;
use crate::users::repo::{InMemoryUsers, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let users = Arc::new(InMemoryUsers::new()) as Arc<dyn UserStore>;
        Ok(Self::from_parts(config, users))
    }

    pub fn from_parts(config: Arc<AppConfig>, users: Arc<dyn UserStore>) -> Self {
        Self { config, users }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with(AppConfig::default())
    }

    #[cfg(test)]
    pub fn fake_with(config: AppConfig) -> Self {
        Self::from_parts(Arc::new(config), Arc::new(InMemoryUsers::new()))
    }
}
