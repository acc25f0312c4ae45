//! Loading placeholder

use dioxus::prelude::*;

use crate::theme::{DISPLAY_FONT, PALETTE};

#[component]
pub fn Loader() -> Element {
    rsx! {
        p {
            class: "message",
            style: "
                text-align: center;
                text-transform: uppercase;
                font-size: 32px;
                font-family: {DISPLAY_FONT};
                margin-top: 24px;
                color: {PALETTE.text_primary};
            ",
            "Loading..."
        }
    }
}
