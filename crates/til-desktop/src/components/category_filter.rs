//! Category filter sidebar

use dioxus::prelude::*;

use til_core::models::{Category, CategoryFilter as Filter};

use crate::state::AppState;
use crate::theme::{DISPLAY_FONT, PALETTE};

/// "All" plus one button per category; every click refetches the list.
#[component]
pub fn CategoryFilter() -> Element {
    let state = use_context::<AppState>();
    let active = state.board.read().filter();

    rsx! {
        aside {
            style: "min-width: 200px;",

            ul {
                style: "list-style: none; padding: 0; margin: 0;",

                li {
                    class: "category",
                    style: "margin-bottom: 16px;",
                    FilterButton {
                        label: "All",
                        background: PALETTE.button_gradient.to_string(),
                        is_active: active == Filter::All,
                        onclick: move |_| state.fetch_facts(Filter::All),
                    }
                }

                for category in Category::ALL {
                    li {
                        key: "{category}",
                        class: "category",
                        style: "margin-bottom: 16px;",
                        FilterButton {
                            label: category.name().to_string(),
                            background: category.color().to_string(),
                            is_active: active == Filter::Only(category),
                            onclick: move |_| state.fetch_facts(category.into()),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterButton(
    label: String,
    background: String,
    is_active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let outline = if is_active {
        format!("3px solid {}", PALETTE.text_primary)
    } else {
        "none".to_string()
    };

    rsx! {
        button {
            class: "btn btn-category",
            r#type: "button",
            style: "
                width: 100%;
                border: none;
                outline: {outline};
                border-radius: 100px;
                padding: 12px 0;
                font-size: 16px;
                font-family: {DISPLAY_FONT};
                text-transform: uppercase;
                cursor: pointer;
                color: {PALETTE.text_primary};
                background: {background};
            ",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
