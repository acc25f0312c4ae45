//! Remote `facts` table access.
//!
//! [`FactsApi`] is the seam between the board logic and the hosted table.
//! [`SupabaseFactsClient`] talks to Supabase's PostgREST endpoint; tests swap
//! in in-memory fakes.

mod query;
mod supabase;

use std::future::Future;

pub use query::{FactQuery, DEFAULT_LIST_LIMIT};
pub use supabase::{SupabaseFactsClient, FACTS_TABLE};

use crate::models::{Fact, FactId, NewFact, VoteKind};
use crate::Result;

/// The three table operations the app relies on.
pub trait FactsApi {
    /// Rows matching `query`, already sorted and limited by the backend.
    fn list(&self, query: &FactQuery) -> impl Future<Output = Result<Vec<Fact>>> + Send;

    /// Insert one fact and return the stored row(s).
    fn insert(&self, fact: &NewFact) -> impl Future<Output = Result<Vec<Fact>>> + Send;

    /// Set one vote column of one row and return the updated row.
    fn update_votes(
        &self,
        id: FactId,
        kind: VoteKind,
        value: u32,
    ) -> impl Future<Output = Result<Fact>> + Send;
}
