//! Fact model

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Server-assigned identifier of a fact row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactId(i64);

impl FactId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row of the remote `facts` table, mirrored locally from the last fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: FactId,
    pub text: String,
    pub source: String,
    pub category: Category,
    #[serde(rename = "votesInteresting", default)]
    pub votes_interesting: u32,
    #[serde(rename = "votesMindblowing", default)]
    pub votes_mindblowing: u32,
    #[serde(rename = "votesFalse", default)]
    pub votes_false: u32,
    /// Creation year, when the table carries one.
    #[serde(rename = "createdIn", default, skip_serializing_if = "Option::is_none")]
    pub created_in: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Fact {
    /// True when false-votes outnumber interesting and mind-blowing votes combined.
    #[must_use]
    pub const fn is_disputed(&self) -> bool {
        self.votes_interesting.saturating_add(self.votes_mindblowing) < self.votes_false
    }

    #[must_use]
    pub const fn votes(&self, kind: VoteKind) -> u32 {
        match kind {
            VoteKind::Interesting => self.votes_interesting,
            VoteKind::Mindblowing => self.votes_mindblowing,
            VoteKind::False => self.votes_false,
        }
    }

    /// Year the fact was created, from `createdIn` or the row timestamp.
    #[must_use]
    pub fn creation_year(&self) -> Option<i32> {
        self.created_in
            .or_else(|| self.created_at.map(|created_at| created_at.year()))
    }
}

/// The three vote counters a reader can bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteKind {
    Interesting,
    Mindblowing,
    False,
}

impl VoteKind {
    pub const ALL: [Self; 3] = [Self::Interesting, Self::Mindblowing, Self::False];

    /// Remote column holding this counter.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Interesting => "votesInteresting",
            Self::Mindblowing => "votesMindblowing",
            Self::False => "votesFalse",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Interesting => "👍",
            Self::Mindblowing => "🤯",
            Self::False => "⛔️",
        }
    }

    /// Counter value after a click: retracts when this client already voted.
    #[must_use]
    pub const fn next_count(current: u32, has_voted: bool) -> u32 {
        if has_voted {
            current.saturating_sub(1)
        } else {
            current.saturating_add(1)
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
