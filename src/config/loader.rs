//! Env file loader
//!
//! Loads dotenv files into the process environment at startup with the
//! following precedence (highest to lowest):
//! 1. Variables already set in the process environment
//! 2. `.env.<APP_ENV>` (only when `APP_ENV` is set)
//! 3. `.env`
//!
//! Loading never overrides an existing variable, so the first file that
//! defines a key wins.

use crate::config::env::execution_environment;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Base env file name
const ENV_FILE: &str = ".env";

/// Candidate env files in precedence order for the given environment label.
pub fn env_file_candidates(dir: &Path, environment: Option<&str>) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);

    if let Some(env) = environment.map(str::trim).filter(|env| !env.is_empty()) {
        candidates.push(dir.join(format!("{ENV_FILE}.{env}")));
    }
    candidates.push(dir.join(ENV_FILE));

    candidates
}

/// Outcome of [`load_env_files`], in candidate order.
///
/// Loading runs before logging is initialized, so the caller reports this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFiles {
    pub loaded: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Load env files from `dir` for the current `APP_ENV`.
///
/// Missing files are recorded as skipped; a file that exists but cannot be
/// parsed is an error.
pub fn load_env_files(dir: &Path) -> Result<EnvFiles, ConfigError> {
    let environment = execution_environment();
    let mut files = EnvFiles::default();

    for path in env_file_candidates(dir, environment.as_deref()) {
        if !path.is_file() {
            files.skipped.push(path);
            continue;
        }

        dotenvy::from_path(&path).map_err(|e| ConfigError::EnvFile {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        files.loaded.push(path);
    }

    Ok(files)
}
