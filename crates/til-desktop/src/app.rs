//! Main application component

use dioxus::prelude::*;

use til_core::models::CategoryFilter as Filter;
use til_core::FactBoard;

use crate::bootstrap_config::load_bootstrap_config;
use crate::components::{CategoryFilter, FactList, Header, Loader, NewFactForm};
use crate::services::{connect_facts_client, show_notice};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let board = use_signal(FactBoard::new);
    let mut facts_client = use_signal(|| None);
    let mut config_error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None);
    let mut initialized = use_signal(|| false);

    let state = use_context_provider(|| AppState {
        board,
        facts_client,
        config_error,
        notice,
    });

    // Show each reported failure in a native dialog
    use_effect(move || {
        if let Some(pending) = notice() {
            spawn(async move {
                notice.set(None);
                show_notice(pending).await;
            });
        }
    });

    // Resolve the table client and run the initial "all" fetch (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true);

        let bootstrap = load_bootstrap_config().with_env_overrides();
        match connect_facts_client(&bootstrap) {
            Ok(Some(client)) => {
                facts_client.set(Some(client));
                state.fetch_facts(Filter::All);
            }
            Ok(None) => {
                tracing::warn!("Supabase is not configured; the board stays empty");
                config_error.set(Some(
                    "Supabase is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY."
                        .to_string(),
                ));
            }
            Err(error) => {
                tracing::error!("Failed to set up the facts table client: {}", error);
                config_error.set(Some(error.to_string()));
            }
        }
    });

    let (form_open, loading) = {
        let board = board.read();
        (board.is_form_open(), board.is_loading())
    };

    rsx! {
        div {
            class: "container",
            style: "
                min-height: 100vh;
                box-sizing: border-box;
                padding: 48px 64px 0;
                display: flex;
                flex-direction: column;
                font-family: 'Sono', system-ui, sans-serif;
                background: {PALETTE.bg_primary};
                color: {PALETTE.text_primary};
            ",

            Header {}

            if form_open {
                NewFactForm {}
            }

            if let Some(message) = (state.config_error)() {
                p {
                    class: "message",
                    style: "color: {PALETTE.disputed}; font-size: 18px;",
                    "{message}"
                }
            }

            main {
                class: "main",
                style: "display: grid; grid-template-columns: 250px 1fr; gap: 48px; flex: 1;",

                CategoryFilter {}

                if loading {
                    Loader {}
                } else {
                    FactList {}
                }
            }
        }
    }
}
