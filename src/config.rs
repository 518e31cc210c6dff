use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 20;

const PATCH_FILE: &str = "patch.json";
const MARKER_FILE: &str = "version.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub locale: String,
    pub output_dir: PathBuf,
    pub requests_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}

impl Config {
    /// Defaults, overridden by whatever is set in the environment or a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(base_url) = lookup("DDRAGON_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(locale) = lookup("DDRAGON_LOCALE") {
            config.locale = locale;
        }
        if let Some(dir) = lookup("PATCH_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("DDRAGON_REQUESTS_PER_SECOND") {
            config.requests_per_second = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::ConfigError(format!(
                        "DDRAGON_REQUESTS_PER_SECOND must be a positive integer, got {:?}",
                        raw
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn patch_path(&self) -> PathBuf {
        self.output_dir.join(PATCH_FILE)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.output_dir.join(MARKER_FILE)
    }
}
