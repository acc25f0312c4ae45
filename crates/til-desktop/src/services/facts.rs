//! Supabase table client for the desktop app.

use std::sync::Arc;
use std::time::Duration;

use til_core::api::SupabaseFactsClient;

use crate::bootstrap_config::DesktopBootstrapConfig;

/// Longest a single table request may take before it counts as failed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared handle to the `facts` table client.
pub type FactsClient = Arc<SupabaseFactsClient>;

/// Build the table client from the bootstrap config.
///
/// Returns `Ok(None)` when no Supabase project is configured at all.
pub fn connect_facts_client(
    config: &DesktopBootstrapConfig,
) -> til_core::Result<Option<FactsClient>> {
    let Some(supabase) = config.supabase_config()? else {
        return Ok(None);
    };

    tracing::info!("Using Supabase project at {}", supabase.url);
    let supabase = supabase.with_request_timeout(REQUEST_TIMEOUT);
    Ok(Some(Arc::new(SupabaseFactsClient::new(&supabase)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_returns_none_when_values_missing() {
        let config = DesktopBootstrapConfig::default();
        assert!(connect_facts_client(&config).unwrap().is_none());
    }

    #[test]
    fn connect_targets_facts_table() {
        let config = DesktopBootstrapConfig {
            supabase_url: Some("https://demo.supabase.co".to_string()),
            supabase_anon_key: Some("anon".to_string()),
        };
        let client = connect_facts_client(&config).unwrap().unwrap();
        assert_eq!(client.table_url(), "https://demo.supabase.co/rest/v1/facts");
    }

    #[test]
    fn connect_rejects_url_without_scheme() {
        let config = DesktopBootstrapConfig {
            supabase_url: Some("demo.supabase.co".to_string()),
            supabase_anon_key: Some("anon".to_string()),
        };
        assert!(connect_facts_client(&config).is_err());
    }
}
