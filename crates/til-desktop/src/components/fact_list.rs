//! Fact list component

use dioxus::prelude::*;

use super::FactItem;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Renders the fetched facts, or a hint when there are none.
#[component]
pub fn FactList() -> Element {
    let state = use_context::<AppState>();
    let facts = state.board.read().facts().to_vec();

    if facts.is_empty() {
        return rsx! {
            p {
                class: "message",
                style: "
                    text-align: center;
                    text-transform: uppercase;
                    font-size: 28px;
                    margin-top: 24px;
                    color: {PALETTE.text_primary};
                ",
                "No facts with this category yet! Create the first one"
            }
        };
    }
    let count = facts.len();

    rsx! {
        section {
            style: "flex: 1; overflow-y: auto; padding-bottom: 40px;",

            ul {
                class: "fact-list",
                style: "list-style: none; padding: 0; margin: 0 0 16px 0;",
                for fact in facts {
                    FactItem { key: "{fact.id}", fact }
                }
            }

            p {
                style: "color: {PALETTE.text_muted};",
                "There are {count} facts in the database. Add your own!"
            }
        }
    }
}
