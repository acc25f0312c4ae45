//! A single fact row with its vote buttons

use dioxus::prelude::*;

use til_core::models::{Fact, VoteKind};

use crate::state::AppState;
use crate::theme::PALETTE;

#[component]
pub fn FactItem(fact: Fact) -> Element {
    let state = use_context::<AppState>();
    let id = fact.id;
    let (is_updating, has_voted) = {
        let board = state.board.read();
        (board.is_updating(id), board.has_voted(id))
    };
    let tag_color = fact.category.color();
    let year = fact
        .creation_year()
        .map(|year| year.to_string())
        .unwrap_or_default();
    let vote_border = if has_voted {
        format!("2px solid {}", PALETTE.text_primary)
    } else {
        "2px solid transparent".to_string()
    };

    rsx! {
        li {
            class: "fact",
            style: "
                font-size: 20px;
                line-height: 1.4;
                background: {PALETTE.bg_card};
                margin-bottom: 16px;
                padding: 16px 24px;
                letter-spacing: -1px;
                border-radius: 16px;
                display: flex;
                align-items: center;
                gap: 24px;
            ",

            p {
                style: "flex: 1; margin: 0;",
                "{fact.text} "
                a {
                    class: "source",
                    href: "{fact.source}",
                    target: "_blank",
                    style: "color: {PALETTE.link}; text-decoration: none; margin-left: 12px;",
                    "(Source)"
                }
            }

            if fact.is_disputed() {
                span {
                    class: "disputed",
                    style: "color: {PALETTE.disputed}; font-weight: 600; margin-right: 10px;",
                    "[⛔️ DISPUTED]"
                }
            }

            if !year.is_empty() {
                span {
                    style: "color: {PALETTE.text_muted}; font-size: 14px;",
                    "{year}"
                }
            }

            span {
                class: "tag",
                style: "
                    text-transform: uppercase;
                    font-size: 14px;
                    padding: 3px 10px 0;
                    border-radius: 100px;
                    background-color: {tag_color};
                ",
                "{fact.category}"
            }

            div {
                class: "vote-buttons",
                style: "margin-left: auto; flex-shrink: 0; display: flex; gap: 8px;",

                for kind in VoteKind::ALL {
                    {
                        let label = format!("{} {}", kind.emoji(), fact.votes(kind));
                        rsx! {
                            button {
                                key: "{kind}",
                                r#type: "button",
                                style: "
                                    border: {vote_border};
                                    background: {PALETTE.bg_primary};
                                    color: inherit;
                                    font-size: 18px;
                                    padding: 6px 12px;
                                    border-radius: 100px;
                                    cursor: pointer;
                                ",
                                disabled: is_updating,
                                onclick: move |_| state.cast_vote(id, kind),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
