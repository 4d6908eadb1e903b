use config::Config;
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_README_URL: &str =
    "https://raw.githubusercontent.com/SimplifyJobs/Summer2026-Internships/dev/README.md";
pub const DEFAULT_STORE_PATH: &str = "notified.json";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub readme_url: String,
    pub store_path: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            readme_url: DEFAULT_README_URL.to_string(),
            store_path: DEFAULT_STORE_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Built-in defaults overlaid with INTERN_-prefixed environment
    /// variables (INTERN_README_URL, INTERN_STORE_PATH, INTERN_TIMEOUT_SECS).
    pub fn load() -> Self {
        let loaded = Config::builder()
            .set_default("readme_url", DEFAULT_README_URL)
            .and_then(|b| b.set_default("store_path", DEFAULT_STORE_PATH))
            .and_then(|b| b.set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64))
            .map(|b| b.add_source(config::Environment::with_prefix("INTERN").try_parsing(true)))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<Settings>());

        match loaded {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring bad settings from environment: {}", e);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::default();
        assert!(settings.readme_url.starts_with("https://"));
        assert_eq!(settings.store_path, "notified.json");
        assert!(settings.timeout_secs > 0);
    }
}
