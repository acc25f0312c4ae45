//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::future::Future;
use std::sync::Arc;

use dioxus::prelude::*;

use til_core::api::FactsApi;
use til_core::flow::{self, Store};
use til_core::models::{CategoryFilter, FactDraft, FactId, VoteKind};
use til_core::{FactBoard, Notice};

use crate::services::FactsClient;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fetched facts plus loading, upload, form and vote flags
    pub board: Signal<FactBoard>,
    /// Table client, absent until configuration resolves
    pub facts_client: Signal<Option<FactsClient>>,
    /// Configuration problem shown instead of the list
    pub config_error: Signal<Option<String>>,
    /// Latest failure waiting for its dialog
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    /// Make `filter` active and fetch its facts.
    ///
    /// A response that arrives after a newer fetch started is dropped.
    pub fn fetch_facts(self, filter: CategoryFilter) {
        let Some(client) = self.facts_client.peek().clone() else {
            tracing::warn!("Fetch for '{}' skipped: no table client", filter);
            return;
        };
        start_fetch(client, self.board, self.notice, filter);
    }

    /// Insert the form's draft if it is valid; clear the form on success.
    pub fn submit_fact(self, draft: Signal<FactDraft>) {
        let Some(client) = self.facts_client.peek().clone() else {
            return;
        };
        start_submit(client, self.board, draft, self.notice);
    }

    /// Toggle this session's `kind` vote on one fact.
    pub fn cast_vote(self, id: FactId, kind: VoteKind) {
        let Some(client) = self.facts_client.peek().clone() else {
            return;
        };
        start_vote(client, self.board, self.notice, id, kind);
    }
}

/// Signal cell handed to the shared flows.
struct SignalStore<T: 'static>(Signal<T>);

impl<T: 'static> Store<T> for SignalStore<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.0.write();
        f(&mut *value)
    }
}

fn start_fetch<A: FactsApi + 'static>(
    api: Arc<A>,
    board: Signal<FactBoard>,
    notice: Signal<Option<Notice>>,
    filter: CategoryFilter,
) {
    run_detached(notice, async move {
        flow::fetch_facts(api.as_ref(), SignalStore(board), filter).await
    });
}

fn start_submit<A: FactsApi + 'static>(
    api: Arc<A>,
    board: Signal<FactBoard>,
    draft: Signal<FactDraft>,
    notice: Signal<Option<Notice>>,
) {
    run_detached(notice, async move {
        flow::submit_fact(api.as_ref(), SignalStore(board), SignalStore(draft)).await
    });
}

fn start_vote<A: FactsApi + 'static>(
    api: Arc<A>,
    board: Signal<FactBoard>,
    notice: Signal<Option<Notice>>,
    id: FactId,
    kind: VoteKind,
) {
    run_detached(notice, async move {
        flow::cast_vote(api.as_ref(), SignalStore(board), id, kind).await
    });
}

/// Run `work` on the root scope, so unmounting the component that started it
/// cannot cancel the request halfway.
fn run_detached(
    mut notice: Signal<Option<Notice>>,
    work: impl Future<Output = Option<Notice>> + 'static,
) {
    let task = spawn_forever(async move {
        if let Some(failure) = work.await {
            notice.set(Some(failure));
        }
    });
    if task.is_none() {
        tracing::error!("No Dioxus runtime to run the table request on");
    }
}
