//! Supabase connection configuration for client apps.
//!
//! The desktop shell resolves these values from its build-time bootstrap JSON
//! and the process environment, then hands a [`SupabaseConfig`] to the
//! table client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

const REST_PATH: &str = "/rest/v1";

/// Environment variable holding the Supabase project URL.
pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the Supabase anon (public) key.
pub const SUPABASE_ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Public connection settings for the hosted `facts` table.
///
/// The anon key is safe to ship with the client. Service-role keys must never
/// be stored here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Optional per-request timeout. `None` leaves the transport defaults.
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let anon_key = anon_key.into().trim().to_string();
        if anon_key.is_empty() {
            return Err(Error::InvalidConfiguration(
                "Supabase anon key must not be empty",
            ));
        }
        normalize_rest_url(&url)?;

        Ok(Self {
            url,
            anon_key,
            request_timeout: None,
        })
    }

    /// Give up on any table request that takes longer than `timeout`.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Base URL of the PostgREST endpoint, e.g. `https://x.supabase.co/rest/v1`.
    pub fn rest_url(&self) -> Result<String> {
        normalize_rest_url(&self.url)
    }
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Turn a project URL into its PostgREST base URL.
pub fn normalize_rest_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidConfiguration(
            "Supabase URL must not be empty",
        ));
    }
    if !is_http_url(trimmed) {
        return Err(Error::InvalidConfiguration(
            "Supabase URL must include http:// or https://",
        ));
    }
    if trimmed.ends_with(REST_PATH) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}{REST_PATH}"))
    }
}

/// Pair up optional URL and key values.
///
/// Both missing means "not configured" (`Ok(None)`); only one of them present
/// is a configuration error.
pub fn resolve_optional_supabase_config(
    url: Option<String>,
    anon_key: Option<String>,
) -> Result<Option<(String, String)>> {
    let url = normalize_text_option(url);
    let anon_key = normalize_text_option(anon_key);

    match (url, anon_key) {
        (None, None) => Ok(None),
        (Some(url), Some(anon_key)) => Ok(Some((url, anon_key))),
        _ => Err(Error::NotConfigured),
    }
}
