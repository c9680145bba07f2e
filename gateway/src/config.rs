use serde::{Deserialize, Serialize};
use std::{env, time::Duration};

const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub target_api: String,
    pub port: u16,
    #[serde(with = "duration_secs")]
    pub token_ttl: Duration,
    pub cookie_secure: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let target_api = env::var("TARGET_API")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse()
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            target_api,
            port,
            token_ttl: Duration::from_secs(token_ttl_secs),
            cookie_secure: is_production(&app_env),
        })
    }
}

fn is_production(app_env: &str) -> bool {
    app_env.eq_ignore_ascii_case("production")
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_env_enables_secure_cookies() {
        assert!(is_production("production"));
        assert!(is_production("PRODUCTION"));
        assert!(!is_production("development"));
        assert!(!is_production(""));
    }
}
