//! Data models for Today I Learned

mod category;
mod draft;
mod fact;

pub use category::{Category, CategoryFilter};
pub use draft::{is_valid_http_url, DraftError, FactDraft, NewFact, MAX_FACT_LENGTH};
pub use fact::{Fact, FactId, VoteKind};
