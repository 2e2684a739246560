use serde::Deserialize;

use std::{env, fs, path::Path};

pub const PLACEHOLDER_API_KEY: &str = "TU_API_KEY_AQUI";
pub const PLACEHOLDER_EMAIL: &str = "cliente@ejemplo.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the external API, e.g. `http://localhost:8000`
    pub api_base_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_payment_email")]
    pub payment_email: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

fn default_payment_email() -> String {
    PLACEHOLDER_EMAIL.to_string()
}

const fn default_port() -> u16 {
    8080
}

fn read_config(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

fn config_from_vars<I>(vars: I) -> Result<Config, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::from_iter(vars).map_err(|e| format!("environment is incomplete: {e}").into())
}

const CONFIG_ENV: &str = "FEEDBACK_FRONT_CONFIG";
const EXAMPLE_CONFIG: &str = "config.example.yaml";

/// Files to try, most specific first, without repeats.
fn config_candidates(configured: Option<String>) -> Vec<String> {
    let mut candidates = Vec::new();
    for path in configured
        .into_iter()
        .chain(["config.yaml".to_string(), EXAMPLE_CONFIG.to_string()])
    {
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }
    candidates
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let candidates = config_candidates(env::var(CONFIG_ENV).ok());

    if let Some(path) = candidates.iter().find(|path| Path::new(path).exists()) {
        if path == EXAMPLE_CONFIG {
            tracing::warn!("Using {EXAMPLE_CONFIG}, its API key is only a placeholder");
        }
        tracing::info!("Reading config from {}", path);
        return read_config(path);
    }

    tracing::info!("No config file among {:?}, reading environment", candidates);
    config_from_vars(env::vars())
        .map_err(|e| format!("no config file found ({}) and {e}", candidates.join(", ")).into())
}
