use std::env;
use std::path::PathBuf;

use crate::models::transport::Transport;
use crate::seed;
use crate::utils::error::{AppError, AppResult};

pub const DEFAULT_LOG_FILTER: &str = "travel_booking=warn";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    // JSON seed file replacing the built-in inventory
    pub seed_file: Option<PathBuf>,
    // None keeps re-prompting forever
    pub max_input_attempts: Option<u32>,
}

impl AppConfig {
    /// Read the configuration from the process environment. A `.env` file in
    /// the working directory is honoured when present.
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();

        let seed_file = env::var_os("BOOKING_SEED_FILE").map(PathBuf::from);
        let max_input_attempts = match env::var("BOOKING_MAX_INPUT_ATTEMPTS") {
            Ok(raw) => Some(parse_attempts(&raw)?),
            Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(AppError::ConfigError(format!("BOOKING_MAX_INPUT_ATTEMPTS: {}", e))),
        };

        Ok(AppConfig {
            seed_file,
            max_input_attempts,
        })
    }

    pub fn transports(&self) -> AppResult<Vec<Transport>> {
        match &self.seed_file {
            Some(path) => seed::load_transports(path),
            None => Ok(seed::default_transports()),
        }
    }
}

fn parse_attempts(raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::ConfigError(format!(
            "BOOKING_MAX_INPUT_ATTEMPTS must be a positive integer, got {:?}",
            raw
        ))),
    }
}
