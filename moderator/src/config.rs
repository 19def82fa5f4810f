//! Store configuration
//!
//! Values are resolved from, in order of precedence:
//! 1. Command line arguments
//! 2. System environment variables
//! 3. A `.env` file in the current directory or a parent directory
//!
//! ## Variables
//! - `NEXT_MODERATOR_STORE`: path of the history artifact
//!   (default `./data/moderators.json`)

use std::path::PathBuf;

use crate::error::{ModeratorError, ModeratorResult};

pub const STORE_ENV: &str = "NEXT_MODERATOR_STORE";
pub const DEFAULT_STORE_PATH: &str = "./data/moderators.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    /// Resolve configuration, preferring `cli_path` when given
    pub fn resolve(cli_path: Option<PathBuf>) -> ModeratorResult<Self> {
        Self::init_env();
        Self::from_sources(cli_path, std::env::var(STORE_ENV).ok())
    }

    /// Load `.env` if present; variables already set are left alone
    fn init_env() {
        let _ = dotenv::dotenv();
    }

    fn from_sources(cli_path: Option<PathBuf>, env_path: Option<String>) -> ModeratorResult<Self> {
        let path = match (cli_path, env_path) {
            (Some(path), _) => path,
            (None, Some(value)) => {
                if value.trim().is_empty() {
                    return Err(ModeratorError::config(format!("{STORE_ENV} is set but empty")));
                }
                PathBuf::from(value.trim())
            }
            (None, None) => return Ok(Self::default()),
        };
        Ok(Self { path })
    }
}
