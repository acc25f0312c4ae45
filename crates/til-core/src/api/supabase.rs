//! Supabase (PostgREST) client for the `facts` table.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::{FactQuery, FactsApi};
use crate::config::SupabaseConfig;
use crate::error::{Error, Result};
use crate::models::{Fact, FactId, NewFact, VoteKind};
use crate::util::compact_text;

/// Name of the table holding the facts.
pub const FACTS_TABLE: &str = "facts";

const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Clone)]
pub struct SupabaseFactsClient {
    table_url: String,
    anon_key: String,
    client: Client,
}

impl SupabaseFactsClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        let rest_url = config.rest_url()?;
        let anon_key = config.anon_key.trim().to_string();
        if anon_key.is_empty() {
            return Err(Error::InvalidConfiguration(
                "Supabase anon key must not be empty",
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            table_url: format!("{rest_url}/{FACTS_TABLE}"),
            anon_key,
            client: builder.build()?,
        })
    }

    #[must_use]
    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn public_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
    }

    async fn send_rows(&self, request: RequestBuilder) -> Result<Vec<Fact>> {
        let response = self.public_request(request).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Vec<Fact>>().await?)
    }
}

impl std::fmt::Debug for SupabaseFactsClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SupabaseFactsClient")
            .field("table_url", &self.table_url)
            .field("anon_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl FactsApi for SupabaseFactsClient {
    async fn list(&self, query: &FactQuery) -> Result<Vec<Fact>> {
        tracing::debug!(
            "Listing facts (category: {:?}, limit: {})",
            query.category,
            query.limit
        );
        let request = self
            .client
            .get(&self.table_url)
            .query(&query.to_query_pairs());
        self.send_rows(request).await
    }

    async fn insert(&self, fact: &NewFact) -> Result<Vec<Fact>> {
        tracing::debug!("Inserting fact in category {}", fact.category);
        let request = self
            .client
            .post(&self.table_url)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&[fact]);
        self.send_rows(request).await
    }

    async fn update_votes(&self, id: FactId, kind: VoteKind, value: u32) -> Result<Fact> {
        tracing::debug!("Setting {} = {} on fact {}", kind.column(), value, id);
        let mut payload = serde_json::Map::new();
        payload.insert(kind.column().to_string(), value.into());
        let request = self
            .client
            .patch(&self.table_url)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&payload);

        self.send_rows(request)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(parse_api_error(status, &body)))
}

#[derive(Debug, Deserialize)]
struct PostgrestErrorResponse {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    code: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<PostgrestErrorResponse>(body) {
        if let Some(message) = payload.message {
            let mut rendered = message.trim().to_string();
            if let Some(code) = payload.code.filter(|code| !code.trim().is_empty()) {
                rendered = format!("{rendered} [{}]", code.trim());
            }
            if let Some(detail) = payload
                .details
                .or(payload.hint)
                .filter(|detail| !detail.trim().is_empty())
            {
                rendered = format!("{rendered}: {}", detail.trim());
            }
            return format!("{rendered} ({})", status.as_u16());
        }
    }

    let compacted = compact_text(body);
    if compacted.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{compacted} ({})", status.as_u16())
    }
}
