//! Headless driver for the fetch, submit and vote flows.

use crate::api::FactsApi;
use crate::board::{FactBoard, Notice};
use crate::flow;
use crate::models::{CategoryFilter, FactDraft, FactId, VoteKind};

/// Owns a [`FactBoard`] and the table client that feeds it.
///
/// Runs the same [`flow`] functions as the desktop shell, with the board held
/// by value instead of in a signal.
#[derive(Debug)]
pub struct FactsController<A> {
    api: A,
    board: FactBoard,
}

impl<A: FactsApi> FactsController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            board: FactBoard::new(),
        }
    }

    pub const fn board(&self) -> &FactBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut FactBoard {
        &mut self.board
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Refetch the list for the active filter.
    pub async fn refresh(&mut self) -> Option<Notice> {
        self.select_category(self.board.filter()).await
    }

    /// Make `filter` active and fetch its facts.
    pub async fn select_category(&mut self, filter: CategoryFilter) -> Option<Notice> {
        flow::fetch_facts(&self.api, &mut self.board, filter).await
    }

    /// Insert the draft if it is valid; see [`flow::submit_fact`].
    pub async fn submit(&mut self, draft: &mut FactDraft) -> Option<Notice> {
        flow::submit_fact(&self.api, &mut self.board, draft).await
    }

    /// Toggle this client's `kind` vote on a listed fact.
    pub async fn vote(&mut self, id: FactId, kind: VoteKind) -> Option<Notice> {
        flow::cast_vote(&self.api, &mut self.board, id, kind).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::FactQuery;
    use crate::models::{Category, Fact, NewFact};
    use crate::{Error, Result};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List(FactQuery),
        Insert(NewFact),
        Update(FactId, VoteKind, u32),
    }

    /// In-memory stand-in for the hosted table that records every call.
    #[derive(Debug, Default)]
    struct FakeTable {
        rows: Mutex<Vec<Fact>>,
        calls: Mutex<Vec<Call>>,
        failing: Mutex<bool>,
    }

    impl FakeTable {
        fn with_rows(rows: Vec<Fact>) -> Self {
            Self {
                rows: Mutex::new(rows),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn set_failing(&self, failing: bool) {
            *self.failing.lock().unwrap() = failing;
        }

        fn record(&self, call: Call) -> Result<()> {
            self.calls.lock().unwrap().push(call);
            if *self.failing.lock().unwrap() {
                return Err(Error::Api("service unavailable (503)".to_string()));
            }
            Ok(())
        }
    }

    impl FactsApi for FakeTable {
        async fn list(&self, query: &FactQuery) -> Result<Vec<Fact>> {
            self.record(Call::List(*query))?;
            let mut rows: Vec<Fact> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|fact| query.category.map_or(true, |c| fact.category == c))
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.votes_interesting.cmp(&a.votes_interesting));
            rows.truncate(query.limit);
            Ok(rows)
        }

        async fn insert(&self, fact: &NewFact) -> Result<Vec<Fact>> {
            self.record(Call::Insert(fact.clone()))?;
            let mut rows = self.rows.lock().unwrap();
            let next_id = rows.iter().map(|row| row.id.get()).max().unwrap_or(0) + 1;
            let stored = Fact {
                id: FactId::new(next_id),
                text: fact.text.clone(),
                source: fact.source.clone(),
                category: fact.category,
                votes_interesting: 0,
                votes_mindblowing: 0,
                votes_false: 0,
                created_in: Some(2024),
                created_at: None,
            };
            rows.push(stored.clone());
            Ok(vec![stored])
        }

        async fn update_votes(&self, id: FactId, kind: VoteKind, value: u32) -> Result<Fact> {
            self.record(Call::Update(id, kind, value))?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|row| row.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            match kind {
                VoteKind::Interesting => row.votes_interesting = value,
                VoteKind::Mindblowing => row.votes_mindblowing = value,
                VoteKind::False => row.votes_false = value,
            }
            Ok(row.clone())
        }
    }

    fn fact(id: i64, category: Category, interesting: u32) -> Fact {
        Fact {
            id: FactId::new(id),
            text: format!("fact {id}"),
            source: "https://example.com".to_string(),
            category,
            votes_interesting: interesting,
            votes_mindblowing: 0,
            votes_false: 0,
            created_in: Some(2023),
            created_at: None,
        }
    }

    fn seeded_controller() -> FactsController<FakeTable> {
        FactsController::new(FakeTable::with_rows(vec![
            fact(1, Category::Finance, 3),
            fact(2, Category::Science, 8),
            fact(3, Category::Finance, 10),
            fact(4, Category::History, 1),
        ]))
    }

    #[tokio::test(flavor = "current_thread")]
    async fn initial_load_is_one_unfiltered_fetch() {
        let mut controller = seeded_controller();

        assert_eq!(controller.refresh().await, None);

        assert_eq!(
            controller.api().calls(),
            vec![Call::List(FactQuery::for_filter(CategoryFilter::All))]
        );
        assert_eq!(controller.board().fact_count(), 4);
        assert!(!controller.board().is_loading());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn each_category_selection_fetches_exactly_that_category() {
        let mut controller = seeded_controller();

        for category in Category::ALL {
            controller.select_category(category.into()).await;
            assert_eq!(
                controller.api().calls().last(),
                Some(&Call::List(FactQuery {
                    category: Some(category),
                    limit: 1000,
                }))
            );
        }
        assert_eq!(controller.api().calls().len(), Category::ALL.len());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn finance_fetch_is_filtered_and_sorted() {
        let mut controller = seeded_controller();

        controller.select_category(Category::Finance.into()).await;

        let facts = controller.board().facts();
        assert!(facts.iter().all(|fact| fact.category == Category::Finance));
        let votes: Vec<_> = facts.iter().map(|fact| fact.votes_interesting).collect();
        assert_eq!(votes, vec![10, 3]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_fetch_reports_notice_and_keeps_list() {
        let mut controller = seeded_controller();
        controller.refresh().await;
        controller.api().set_failing(true);

        let notice = controller.select_category(Category::News.into()).await;

        assert_eq!(notice, Some(Notice::FetchFailed));
        assert_eq!(controller.board().fact_count(), 4);
        assert_eq!(controller.api().calls().len(), 2);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn valid_submission_inserts_exactly_the_three_fields() {
        let mut controller = seeded_controller();
        controller.refresh().await;
        controller.board_mut().show_form();
        let mut draft = FactDraft::new("Water boils at 100C", "https://example.com", "science");

        let notice = controller.submit(&mut draft).await;

        assert_eq!(notice, None);
        assert_eq!(
            controller.api().calls().last(),
            Some(&Call::Insert(NewFact {
                text: "Water boils at 100C".to_string(),
                source: "https://example.com".to_string(),
                category: Category::Science,
            }))
        );
        let first = &controller.board().facts()[0];
        assert_eq!(first.text, "Water boils at 100C");
        assert_eq!(first.category, Category::Science);
        assert_eq!(
            (first.votes_interesting, first.votes_mindblowing, first.votes_false),
            (0, 0, 0)
        );
        assert_eq!(draft, FactDraft::default());
        assert!(!controller.board().is_form_open());
        assert!(!controller.board().is_uploading());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submitted_fact_survives_a_refetch() {
        let mut controller = seeded_controller();
        let mut draft = FactDraft::new("Water boils at 100C", "https://example.com", "science");
        controller.submit(&mut draft).await;

        controller.select_category(Category::Science.into()).await;

        assert!(controller
            .board()
            .facts()
            .iter()
            .any(|fact| fact.text == "Water boils at 100C" && fact.votes_interesting == 0));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn invalid_submissions_issue_no_insert() {
        let long_text = "x".repeat(201);
        let drafts = [
            FactDraft::new("", "https://example.com", "science"),
            FactDraft::new(long_text.as_str(), "https://example.com", "science"),
            FactDraft::new("Fact", "example.com", "science"),
            FactDraft::new("Fact", "https://example.com", ""),
        ];

        for mut draft in drafts {
            let mut controller = seeded_controller();
            let before = draft.clone();

            assert_eq!(controller.submit(&mut draft).await, None);
            assert!(controller.api().calls().is_empty());
            assert_eq!(draft, before);
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_submission_keeps_draft_and_form() {
        let mut controller = seeded_controller();
        controller.board_mut().show_form();
        controller.api().set_failing(true);
        let mut draft = FactDraft::new("Fact", "https://example.com", "news");

        let notice = controller.submit(&mut draft).await;

        assert_eq!(notice, Some(Notice::InsertFailed));
        assert_eq!(draft.text, "Fact");
        assert!(controller.board().is_form_open());
        assert!(!controller.board().is_uploading());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn repeated_votes_alternate_and_return_to_start() {
        let mut controller = seeded_controller();
        controller.refresh().await;
        let id = FactId::new(4);

        let mut observed = Vec::new();
        for _ in 0..4 {
            assert_eq!(controller.vote(id, VoteKind::Mindblowing).await, None);
            observed.push(controller.board().fact(id).unwrap().votes_mindblowing);
        }

        assert_eq!(observed, vec![1, 0, 1, 0]);
        let updates: Vec<_> = controller
            .api()
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Update(..)))
            .collect();
        assert_eq!(updates.len(), 4);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_vote_is_reported_and_changes_nothing() {
        let mut controller = seeded_controller();
        controller.refresh().await;
        controller.api().set_failing(true);
        let id = FactId::new(2);

        let notice = controller.vote(id, VoteKind::False).await;

        assert_eq!(notice, Some(Notice::VoteFailed));
        assert_eq!(controller.board().fact(id).unwrap().votes_false, 0);
        assert!(!controller.board().has_voted(id));
        assert!(!controller.board().is_updating(id));
    }
}
