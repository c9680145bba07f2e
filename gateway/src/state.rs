use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            upstream: reqwest::Client::new(),
        }
    }
}
