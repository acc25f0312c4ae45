//! Fact submission form

use dioxus::prelude::*;

use til_core::models::{Category, FactDraft};

use crate::state::AppState;
use crate::theme::{DISPLAY_FONT, PALETTE};

/// Form for sharing a new fact.
///
/// Invalid input is never sent; the fields stay editable until the insert
/// succeeds.
#[component]
pub fn NewFactForm() -> Element {
    let state = use_context::<AppState>();
    let mut draft = use_signal(FactDraft::default);
    let uploading = state.board.read().is_uploading();

    let current = draft();
    let remaining = current.remaining_chars();
    let field_style = format!(
        "
            background: {};
            border: none;
            border-radius: 100px;
            padding: 16px;
            font-size: 18px;
            color: inherit;
            font-family: inherit;
        ",
        PALETTE.input_bg
    );

    rsx! {
        form {
            class: "fact-form",
            style: "
                background: {PALETTE.bg_card};
                margin-bottom: 40px;
                padding: 16px 32px;
                display: flex;
                align-items: center;
                gap: 16px;
                border-radius: 16px;
            ",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                state.submit_fact(draft);
            },

            input {
                r#type: "text",
                style: "{field_style} flex-grow: 1;",
                placeholder: "Share a fact with the world...",
                value: "{current.text}",
                disabled: uploading,
                oninput: move |evt: FormEvent| draft.write().text = evt.value(),
            }

            span {
                style: "font-weight: 600; font-size: 18px; margin-right: 18px;",
                "{remaining}"
            }

            input {
                r#type: "text",
                style: "{field_style}",
                placeholder: "Trustworthy source...",
                value: "{current.source}",
                disabled: uploading,
                oninput: move |evt: FormEvent| draft.write().source = evt.value(),
            }

            select {
                style: "{field_style}",
                value: "{current.category}",
                disabled: uploading,
                onchange: move |evt: FormEvent| draft.write().category = evt.value(),

                option { value: "", "Choose category:" }
                for category in Category::ALL {
                    option {
                        key: "{category}",
                        value: "{category}",
                        selected: current.category == category.name(),
                        {category.name().to_uppercase()}
                    }
                }
            }

            button {
                class: "btn btn-large",
                r#type: "submit",
                style: "
                    border: none;
                    font-family: {DISPLAY_FONT};
                    text-transform: uppercase;
                    font-size: 20px;
                    padding: 16px 32px;
                    border-radius: 100px;
                    cursor: pointer;
                    color: inherit;
                    background-image: {PALETTE.button_gradient};
                ",
                disabled: uploading,
                "Post"
            }
        }
    }
}
