//! Native message dialogs for failures the user must see.

use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};
use til_core::Notice;

const DIALOG_TITLE: &str = "Today I Learned";

/// Show `notice` in a modal dialog and wait until it is dismissed.
pub async fn show_notice(notice: Notice) {
    tracing::warn!("Notifying user: {}", notice);
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(DIALOG_TITLE)
        .set_description(notice.message())
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
