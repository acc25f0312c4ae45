//! The fetch, submit and vote flows, written once for every shell.
//!
//! Each flow runs a `begin_*` step on the board, awaits the table, then runs
//! the matching `finish_*` step. Board and draft access goes through
//! [`Store`], so a reactive shell can keep them in its own cells while the
//! headless [`FactsController`](crate::FactsController) passes plain
//! `&mut` references. No borrow of the board is held across an await.

use crate::api::FactsApi;
use crate::board::{FactBoard, Notice};
use crate::models::{CategoryFilter, FactDraft, FactId, VoteKind};

/// Short-lived mutable access to a value owned elsewhere.
pub trait Store<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> Store<T> for &mut T {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(self)
    }
}

/// Make `filter` active and load its facts.
pub async fn fetch_facts<A, B>(api: &A, mut board: B, filter: CategoryFilter) -> Option<Notice>
where
    A: FactsApi,
    B: Store<FactBoard>,
{
    let ticket = board.update(|board| board.begin_fetch(filter));
    let result = api.list(&ticket.query()).await;
    let outcome = board.update(|board| board.finish_fetch(ticket, result));
    tracing::debug!("Fetch for '{}' finished: {:?}", filter, outcome);
    outcome.notice()
}

/// Insert the draft if it is valid. Invalid drafts are skipped silently.
///
/// The draft is cleared only when the insert succeeds.
pub async fn submit_fact<A, B, D>(api: &A, mut board: B, mut draft: D) -> Option<Notice>
where
    A: FactsApi,
    B: Store<FactBoard>,
    D: Store<FactDraft>,
{
    let payload = match draft.update(|draft| draft.validate()) {
        Ok(payload) => payload,
        Err(reason) => {
            tracing::debug!("Skipping submission: {}", reason);
            return None;
        }
    };
    if !board.update(FactBoard::begin_upload) {
        return None;
    }

    let result = api.insert(&payload).await;
    let notice = board.update(|board| board.finish_upload(result));
    if notice.is_none() {
        tracing::info!("Shared a new {} fact", payload.category);
        draft.update(FactDraft::clear);
    }
    notice
}

/// Toggle this client's `kind` vote on a listed fact.
pub async fn cast_vote<A, B>(api: &A, mut board: B, id: FactId, kind: VoteKind) -> Option<Notice>
where
    A: FactsApi,
    B: Store<FactBoard>,
{
    let ticket = board.update(|board| board.begin_vote(id, kind))?;
    let result = api.update_votes(id, kind, ticket.value).await;
    board.update(|board| board.finish_vote(ticket, result))
}
