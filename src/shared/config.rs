use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Connection settings for the hosted backend
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Signed-in user's JWT; requests fall back to the anon key without it
    pub access_token: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Quiescence window applied to free-text queries
    pub debounce_window: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase: SupabaseConfig,
    pub discovery: DiscoveryConfig,
}

impl AppConfig {
    /// Load configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("SUPABASE_URL").ok_or_else(|| {
            AppError::ConfigError("SUPABASE_URL environment variable not found".to_string())
        })?;
        let url = Self::validate_url(&url)?;

        let anon_key = lookup("SUPABASE_ANON_KEY")
            .or_else(|| lookup("SUPABASE_KEY"))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(
                    "SUPABASE_ANON_KEY (or SUPABASE_KEY) environment variable not found"
                        .to_string(),
                )
            })?;

        let access_token = lookup("SUPABASE_ACCESS_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let request_timeout_secs =
            Self::parse_number(&lookup, "SUPABASE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if request_timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "SUPABASE_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let debounce_ms = Self::parse_number(&lookup, "DISCOVERY_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)?;

        // Log target without exposing keys
        log_info!(
            "Configured hosted store at {} (authenticated: {})",
            url,
            access_token.is_some()
        );

        Ok(Self {
            supabase: SupabaseConfig {
                url,
                anon_key,
                access_token,
                request_timeout_secs,
            },
            discovery: DiscoveryConfig {
                debounce_window: Duration::from_millis(debounce_ms),
            },
        })
    }

    fn validate_url(raw: &str) -> AppResult<String> {
        let url = raw.trim().trim_end_matches('/');
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(AppError::ConfigError(
                "Invalid SUPABASE_URL. Must start with http:// or https://".to_string(),
            ));
        }
        if url.len() <= "https://".len() {
            return Err(AppError::ConfigError(
                "SUPABASE_URL appears to be malformed".to_string(),
            ));
        }
        Ok(url.to_string())
    }

    fn parse_number<F>(lookup: &F, key: &str, default: u64) -> AppResult<u64>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(key) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("{} must be a whole number: {}", key, e))
            }),
            None => Ok(default),
        }
    }
}
