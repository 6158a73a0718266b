//! User action handlers
//!
//! Each handler applies the matching workflow transition and performs the
//! side effects the core emits: write-through tone persistence, clipboard
//! writes, and toast notifications.

use crate::clipboard;
use crate::constants::EXAMPLE_EMAILS;
use crate::input::Action;
use crate::rewrite::RewriteCommand;
use crate::tone::Tone;

use super::App;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action) {
        match action {
            Action::NextTone => self.change_tone(self.state.workflow.tone.next()),
            Action::PrevTone => self.change_tone(self.state.workflow.tone.prev()),
            Action::Rewrite => self.trigger_rewrite().await,
            Action::CopyRewritten => self.copy_rewritten(),
            Action::ClearInput => self.state.workflow.clear_input(),
            Action::DismissError => self.state.workflow.clear_error(),
            Action::LoadExample => self.load_example(),
            // Quit is resolved in the event loop before dispatch
            Action::Quit => {}
        }
    }

    /// Change the selected tone: update state, write through to the
    /// preference store, announce it.
    fn change_tone(&mut self, tone: Tone) {
        self.state.workflow.change_tone(tone);
        self.prefs.save_tone(tone);
        self.notify(
            "Tone Updated",
            format!("Email tone set to {}", tone.label()),
        );
    }

    /// Start a rewrite attempt. `begin_rewrite` returns the prompt only
    /// when a network call must actually be issued; re-entrant triggers
    /// while loading and validation failures resolve locally.
    async fn trigger_rewrite(&mut self) {
        let Some(prompt) = self.state.workflow.begin_rewrite() else {
            return;
        };

        if self
            .rewrite
            .cmd_tx
            .send(RewriteCommand::Rewrite { prompt })
            .await
            .is_err()
        {
            tracing::error!("Rewrite actor is gone; failing the attempt");
            self.state.workflow.resolve_rewrite(Err(
                crate::rewrite::GenerationError::Unreachable(
                    crate::constants::UNREACHABLE_ERROR.to_string(),
                ),
            ));
        }
    }

    /// Write the rewritten email to the system clipboard.
    fn copy_rewritten(&mut self) {
        if !self.state.workflow.can_copy() {
            return;
        }

        match clipboard::copy_text(&self.state.workflow.rewritten_text) {
            Ok(()) => self.notify(
                "Copied to clipboard",
                "The text has been copied to your clipboard.",
            ),
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                self.state.workflow.set_error("Failed to copy to clipboard.");
            }
        }
    }

    /// Load the next canned example email into the editor.
    fn load_example(&mut self) {
        let example = EXAMPLE_EMAILS[self.state.example_cursor % EXAMPLE_EMAILS.len()];
        self.state.example_cursor = (self.state.example_cursor + 1) % EXAMPLE_EMAILS.len();

        self.state.workflow.set_input(example);
        self.notify("Example Loaded", "You can now rewrite this example email.");
    }

    /// Emit a notification event: in-app toast, plus a desktop mirror when
    /// the feature and config allow it.
    pub(crate) fn notify(&mut self, title: impl ToString, description: impl ToString) {
        let title = title.to_string();
        let description = description.to_string();

        #[cfg(feature = "notifications")]
        crate::notification::notify_toast(&self.config, &title, &description);

        self.state.push_toast(title, description);
    }
}
