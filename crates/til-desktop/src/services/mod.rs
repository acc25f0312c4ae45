//! Application services
//!
//! Table client construction and user notifications.

mod facts;
mod notify;

pub use facts::{connect_facts_client, FactsClient};
pub use notify::show_notice;
