//! Desktop bootstrap configuration loaded from build-time generated JSON.

use serde::{Deserialize, Serialize};
use til_core::config::{
    resolve_optional_supabase_config, SupabaseConfig, SUPABASE_ANON_KEY_ENV, SUPABASE_URL_ENV,
};
use til_core::util::normalize_text_option;

/// Supabase values baked into the binary by `build.rs`.
///
/// Only the public anon key belongs here; the table is protected by row-level
/// security on the Supabase side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesktopBootstrapConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
}

/// Loads the generated desktop bootstrap JSON from `OUT_DIR`.
///
/// A malformed file is logged and treated as empty so runtime environment
/// variables can still configure the app.
pub fn load_bootstrap_config() -> DesktopBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/desktop-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        DesktopBootstrapConfig::default()
    })
}

impl DesktopBootstrapConfig {
    /// Overlay runtime values on top of the embedded ones.
    #[must_use]
    pub fn with_overrides(self, url: Option<String>, anon_key: Option<String>) -> Self {
        Self {
            supabase_url: normalize_text_option(url).or(self.supabase_url),
            supabase_anon_key: normalize_text_option(anon_key).or(self.supabase_anon_key),
        }
    }

    /// Embedded values overridden by `SUPABASE_URL` / `SUPABASE_ANON_KEY`.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(SUPABASE_URL_ENV).ok(),
            std::env::var(SUPABASE_ANON_KEY_ENV).ok(),
        )
    }

    pub fn supabase_config(&self) -> til_core::Result<Option<SupabaseConfig>> {
        resolve_optional_supabase_config(
            self.supabase_url.clone(),
            self.supabase_anon_key.clone(),
        )?
        .map(|(url, anon_key)| SupabaseConfig::new(url, anon_key))
        .transpose()
    }
}
