// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed, as do set-but-empty values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional live model server base URL; the stub is used when unset.
    Endpoint,
    /// Optional run root override.
    RunRoot,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional sample fixture directory override.
    SamplesDir,
    /// Optional switch targeting the default local model server (`1`/`true`).
    Live,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endpoint => "MAX_QA_SYSTEM_TEST_ENDPOINT",
            Self::RunRoot => "MAX_QA_SYSTEM_TEST_RUN_ROOT",
            Self::TimeoutSeconds => "MAX_QA_SYSTEM_TEST_TIMEOUT_SEC",
            Self::SamplesDir => "MAX_QA_SYSTEM_TEST_SAMPLES_DIR",
            Self::Live => "MAX_QA_SYSTEM_TEST_LIVE",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Live model server base URL, without a trailing slash.
    pub endpoint: Option<String>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional sample fixture directory override.
    pub samples_dir: Option<PathBuf>,
    /// Run against the default local server when no endpoint is configured.
    pub live: bool,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or endpoint URL).
    pub fn load() -> Result<Self, String> {
        let endpoint = read_env_nonempty(SystemTestEnv::Endpoint.as_str())?
            .map(|value| parse_endpoint(SystemTestEnv::Endpoint.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let samples_dir =
            read_env_nonempty(SystemTestEnv::SamplesDir.as_str())?.map(PathBuf::from);
        let live = parse_bool_env(
            SystemTestEnv::Live.as_str(),
            read_env_nonempty(SystemTestEnv::Live.as_str())?,
        )?;
        Ok(Self {
            endpoint,
            run_root,
            timeout,
            samples_dir,
            live,
        })
    }

    /// Returns the live server base URL, if scenarios should run live.
    ///
    /// An explicit endpoint wins; otherwise the live switch selects
    /// `default_base_url`. `None` means the in-process stub is used.
    #[must_use]
    pub fn live_endpoint(&self, default_base_url: &str) -> Option<String> {
        match &self.endpoint {
            Some(endpoint) => Some(endpoint.clone()),
            None if self.live => Some(default_base_url.trim_end_matches('/').to_string()),
            None => None,
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
pub fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean switch; unset means `false`.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}

/// Parses an absolute `http`/`https` base URL and strips trailing slashes.
///
/// # Errors
///
/// Returns an error when the value is not a URL, uses another scheme, or has
/// no host.
fn parse_endpoint(name: &str, raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|err| format!("{name} must be an absolute URL: {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("{name} must use http or https"));
    }
    if url.host_str().is_none() {
        return Err(format!("{name} must include a host"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
