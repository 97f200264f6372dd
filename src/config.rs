//! Launch arguments and secret loading.
//!
//! The experiment group normally arrives as a launcher query parameter;
//! everything else has a default that matches the lab machine layout.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::engine::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::model::condition::group_from_query;

/// Name of the credential, both as environment variable and as TOML key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Parser)]
#[command(name = "travel-cocreator", about = "Travel recommendation chatbot for condition experiments")]
pub struct LaunchArgs {
    /// Experiment group tag (e.g. S2_Pop). Omit for researcher mode.
    #[arg(long)]
    pub group: Option<String>,

    /// Raw launcher query string; its `group` key is used when --group is absent.
    #[arg(long)]
    pub query: Option<String>,

    /// Travel dataset (JSON array).
    #[arg(long, default_value = "travel_data.json")]
    pub data: PathBuf,

    /// Secrets file holding OPENAI_API_KEY.
    #[arg(long, default_value = ".streamlit/secrets.toml")]
    pub secrets: PathBuf,

    /// Logo image.
    #[arg(long, default_value = "Fitlab.png")]
    pub logo: PathBuf,

    /// Chat model identifier.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl LaunchArgs {
    /// Explicit `--group` wins over the query string.
    pub fn group_tag(&self) -> Option<String> {
        self.group
            .clone()
            .or_else(|| self.query.as_deref().and_then(group_from_query))
    }
}

/* =========================
   Secrets
   ========================= */

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not set and no key was found in {}", .path.display())]
    Missing { var: &'static str, path: PathBuf },
    #[error("failed to read secrets at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse secrets at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Text for the startup error dialog.
    pub fn dialog_text(&self) -> String {
        format!("The chatbot cannot start.\n\n{self}")
    }
}

#[derive(Deserialize)]
struct SecretsFile {
    #[serde(rename = "OPENAI_API_KEY")]
    openai_api_key: Option<String>,
}

#[derive(Clone)]
pub struct Secrets {
    api_key: String,
}

impl Secrets {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets").field("api_key", &"<redacted>").finish()
    }
}

/// Resolve the API credential. A non-empty `env_value` takes precedence
/// over the file; an empty key anywhere counts as missing.
pub fn load_secrets(path: &Path, env_value: Option<String>) -> Result<Secrets, ConfigError> {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        return Ok(Secrets { api_key: key });
    }

    let missing = || ConfigError::Missing {
        var: API_KEY_VAR,
        path: path.to_path_buf(),
    };

    if !path.exists() {
        return Err(missing());
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SecretsFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    file.openai_api_key
        .filter(|k| !k.trim().is_empty())
        .map(|api_key| Secrets { api_key })
        .ok_or_else(missing)
}

/// [`load_secrets`] with the process environment.
pub fn load_secrets_from_env(path: &Path) -> Result<Secrets, ConfigError> {
    load_secrets(path, std::env::var(API_KEY_VAR).ok())
}
