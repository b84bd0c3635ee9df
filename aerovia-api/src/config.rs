use aerovia_booking::LegSchedule;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// How each itinerary leg's travel date is derived from the start.
    #[serde(default)]
    pub leg_schedule: LegSchedule,
    /// Hop limit for route search.
    #[serde(default = "default_max_legs")]
    pub max_route_legs: usize,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            leg_schedule: LegSchedule::default(),
            max_route_legs: default_max_legs(),
        }
    }
}

fn default_max_legs() -> usize {
    3
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional.
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in.
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `AEROVIA_SERVER__PORT=8080`.
            .add_source(config::Environment::with_prefix("AEROVIA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
