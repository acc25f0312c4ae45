//! Local fact board state.
//!
//! [`FactBoard`] owns everything the view renders: the fetched list, the
//! loading/uploading flags, the active filter, form visibility and the
//! per-item vote toggles. Every remote call is split into a `begin_*` step
//! that runs before the request and a `finish_*` step that applies the
//! response, so callers never hold the board across an await point.

use std::collections::HashMap;
use std::fmt;

use crate::api::FactQuery;
use crate::error::Result;
use crate::models::{CategoryFilter, Fact, FactId, VoteKind};

/// A failure the user must be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FetchFailed,
    InsertFailed,
    VoteFailed,
}

impl Notice {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::FetchFailed => "There was a problem getting data.",
            Self::InsertFailed => "There was a problem inserting data.",
            Self::VoteFailed => "There was a problem updating the vote.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Handle for one in-flight list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    sequence: u64,
    filter: CategoryFilter,
}

impl FetchTicket {
    #[must_use]
    pub fn query(&self) -> FactQuery {
        FactQuery::for_filter(self.filter)
    }
}

/// What happened to a finished fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with this many rows.
    Applied(usize),
    /// The request failed; the previous list is kept.
    Failed(Notice),
    /// A newer fetch was started meanwhile; the response was dropped.
    Stale,
}

impl FetchOutcome {
    #[must_use]
    pub const fn notice(self) -> Option<Notice> {
        match self {
            Self::Failed(notice) => Some(notice),
            Self::Applied(_) | Self::Stale => None,
        }
    }
}

/// Handle for one in-flight vote update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTicket {
    pub id: FactId,
    pub kind: VoteKind,
    /// Counter value to write.
    pub value: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ItemState {
    has_voted: bool,
    is_updating: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactBoard {
    facts: Vec<Fact>,
    filter: CategoryFilter,
    is_loading: bool,
    is_uploading: bool,
    form_open: bool,
    items: HashMap<FactId, ItemState>,
    fetch_sequence: u64,
}

impl FactBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    #[must_use]
    pub fn fact(&self, id: FactId) -> Option<&Fact> {
        self.facts.iter().find(|fact| fact.id == id)
    }

    #[must_use]
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.form_open
    }

    #[must_use]
    pub fn has_voted(&self, id: FactId) -> bool {
        self.items.get(&id).is_some_and(|item| item.has_voted)
    }

    #[must_use]
    pub fn is_updating(&self, id: FactId) -> bool {
        self.items.get(&id).is_some_and(|item| item.is_updating)
    }

    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    pub fn show_form(&mut self) {
        self.form_open = true;
    }

    pub fn hide_form(&mut self) {
        self.form_open = false;
    }

    /// Switch to `filter` and start a fetch for it.
    pub fn begin_fetch(&mut self, filter: CategoryFilter) -> FetchTicket {
        self.fetch_sequence += 1;
        self.filter = filter;
        self.is_loading = true;
        FetchTicket {
            sequence: self.fetch_sequence,
            filter,
        }
    }

    /// Apply a fetch response. Only the most recently started fetch counts.
    ///
    /// A successful fetch resets every vote toggle. A failed one keeps the
    /// list and the toggles as they were; votes still in flight clear their
    /// own `is_updating` flag when they finish.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Fact>>) -> FetchOutcome {
        if ticket.sequence != self.fetch_sequence {
            tracing::debug!(
                "Dropping stale fetch #{} for '{}' (latest is #{})",
                ticket.sequence,
                ticket.filter,
                self.fetch_sequence
            );
            return FetchOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(facts) => {
                let count = facts.len();
                self.facts = facts;
                self.items.clear();
                FetchOutcome::Applied(count)
            }
            Err(error) => {
                tracing::warn!("Failed to fetch facts for '{}': {}", ticket.filter, error);
                FetchOutcome::Failed(Notice::FetchFailed)
            }
        }
    }

    /// Mark an insert as in flight. Returns `false` if one already is.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_uploading {
            return false;
        }
        self.is_uploading = true;
        true
    }

    /// Apply an insert response: prepend the stored rows and close the form.
    pub fn finish_upload(&mut self, result: Result<Vec<Fact>>) -> Option<Notice> {
        self.is_uploading = false;
        match result {
            Ok(inserted) => {
                self.facts.splice(0..0, inserted);
                self.form_open = false;
                None
            }
            Err(error) => {
                tracing::warn!("Failed to insert fact: {}", error);
                Some(Notice::InsertFailed)
            }
        }
    }

    /// Start a vote on a listed fact that is not already being updated.
    pub fn begin_vote(&mut self, id: FactId, kind: VoteKind) -> Option<VoteTicket> {
        let current = self.fact(id)?.votes(kind);
        let item = self.items.entry(id).or_default();
        if item.is_updating {
            return None;
        }
        item.is_updating = true;
        Some(VoteTicket {
            id,
            kind,
            value: VoteKind::next_count(current, item.has_voted),
        })
    }

    /// Apply a vote response: swap in the returned row and flip the toggle.
    pub fn finish_vote(&mut self, ticket: VoteTicket, result: Result<Fact>) -> Option<Notice> {
        if let Some(item) = self.items.get_mut(&ticket.id) {
            item.is_updating = false;
        }

        match result {
            Ok(updated) => {
                let Some(slot) = self.facts.iter_mut().find(|fact| fact.id == ticket.id) else {
                    tracing::debug!("Fact {} left the list before its vote landed", ticket.id);
                    return None;
                };
                *slot = updated;
                let item = self.items.entry(ticket.id).or_default();
                item.has_voted = !item.has_voted;
                None
            }
            Err(error) => {
                tracing::warn!(
                    "Failed to update {} on fact {}: {}",
                    ticket.kind,
                    ticket.id,
                    error
                );
                Some(Notice::VoteFailed)
            }
        }
    }
}
