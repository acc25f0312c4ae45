//! Header with the app title and the form toggle

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::{DISPLAY_FONT, PALETTE};

/// Stateless header; the button shows or hides the submission form.
#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let form_open = state.board.read().is_form_open();

    rsx! {
        header {
            class: "header",
            style: "
                margin-bottom: 40px;
                display: flex;
                align-items: center;
                justify-content: space-between;
            ",

            div {
                class: "logo",
                style: "display: flex; align-items: center; gap: 16px;",
                span { style: "font-size: 56px;", "💡" }
                h1 {
                    style: "
                        font-size: 42px;
                        text-transform: uppercase;
                        font-family: {DISPLAY_FONT};
                        line-height: 1;
                        margin: 0;
                        color: {PALETTE.text_primary};
                    ",
                    "Today I Learned!"
                }
            }

            button {
                class: "btn btn-large btn-open",
                r#type: "button",
                style: "
                    border: none;
                    font-family: {DISPLAY_FONT};
                    text-transform: uppercase;
                    font-size: 20px;
                    padding: 20px 32px;
                    border-radius: 100px;
                    cursor: pointer;
                    color: inherit;
                    background-image: {PALETTE.button_gradient};
                ",
                onclick: move |_| state.board.write().toggle_form(),
                if form_open {
                    "Close"
                } else {
                    "Share a fact"
                }
            }
        }
    }
}
