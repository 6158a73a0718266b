//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.
//!
//! `WorkflowState` is the single mutable entity of the rewrite workflow;
//! every transition from the state machine is a method on it. `AppState`
//! wraps it together with presentation-only state (toasts, example cursor)
//! and is what gets snapshotted to the render thread.

use std::time::Instant;

use crate::constants::{EMPTY_INPUT_MSG, MAX_EMAIL_CHARS, TOAST_TTL_SECS};
use crate::rewrite::{GenerationError, build_prompt, validate};
use crate::tone::Tone;

/// Coarse status of the rewrite workflow. Cyclic: any terminal phase
/// accepts a new trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// A discrete notification event, rendered as a toast by the UI.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= TOAST_TTL_SECS
    }
}

/// The rewrite workflow's observable state, mutated exclusively through
/// the transition methods below.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub tone: Tone,
    pub source_text: String,
    pub rewritten_text: String,
    pub prompt_preview: String,
    pub phase: Phase,
    pub error_message: Option<String>,
}

impl WorkflowState {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            source_text: String::new(),
            rewritten_text: String::new(),
            prompt_preview: String::new(),
            phase: Phase::Idle,
            error_message: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Change the selected tone. Valid in any state; clears any existing
    /// error, leaves the phase untouched. Persistence and the notification
    /// are the controller's job.
    pub fn change_tone(&mut self, tone: Tone) {
        self.tone = tone;
        self.error_message = None;
    }

    /// Append one character of input, respecting the collection cap.
    pub fn push_char(&mut self, c: char) {
        self.error_message = None;
        if self.source_text.chars().count() < MAX_EMAIL_CHARS {
            self.source_text.push(c);
        }
    }

    /// Append pasted text, truncated to whatever fits under the cap.
    pub fn push_str(&mut self, text: &str) {
        self.error_message = None;
        let remaining = MAX_EMAIL_CHARS.saturating_sub(self.source_text.chars().count());
        self.source_text.extend(text.chars().take(remaining));
    }

    /// Replace the input wholesale (example loading), truncated to the cap.
    pub fn set_input(&mut self, text: &str) {
        self.error_message = None;
        self.source_text = text.chars().take(MAX_EMAIL_CHARS).collect();
    }

    pub fn backspace(&mut self) {
        self.error_message = None;
        self.source_text.pop();
    }

    /// Empty the input. Focus return is a presentation concern.
    pub fn clear_input(&mut self) {
        self.source_text.clear();
        self.error_message = None;
    }

    /// Surface an error message from a side effect (e.g. a clipboard
    /// failure). Replaces any current message; phase, input, and output
    /// are untouched.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Dismiss the error message. Idempotent; phase, input, and output are
    /// untouched.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Start a rewrite attempt. Returns the prompt to dispatch, or None
    /// when no network call must be issued: re-entrant triggers while
    /// Loading are ignored (no queuing, preview unchanged), and empty
    /// input fails validation locally.
    pub fn begin_rewrite(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        if validate(&self.source_text).is_err() {
            self.phase = Phase::Error;
            self.error_message = Some(EMPTY_INPUT_MSG.to_string());
            return None;
        }

        let prompt = build_prompt(self.tone, &self.source_text);
        self.prompt_preview = prompt.clone();
        self.phase = Phase::Loading;
        self.error_message = None;
        Some(prompt)
    }

    /// Apply the completion of the in-flight attempt. The result always
    /// applies, even if the user edited tone or input while the request
    /// was outstanding (documented race: the attempt is never cancelled).
    pub fn resolve_rewrite(&mut self, result: Result<String, GenerationError>) {
        match result {
            Ok(text) => {
                // Pass-through byte-for-byte, whitespace included.
                self.rewritten_text = text;
                self.phase = Phase::Success;
                self.error_message = None;
            }
            Err(e) => {
                self.rewritten_text.clear();
                self.phase = Phase::Error;
                self.error_message = Some(e.message().to_string());
            }
        }
    }

    /// Copy is only meaningful once a rewrite exists.
    pub fn can_copy(&self) -> bool {
        !self.rewritten_text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.source_text.chars().count()
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub workflow: WorkflowState,
    /// Pending notification toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Which canned example the next load picks
    pub example_cursor: usize,
}

impl AppState {
    pub fn new(tone: Tone) -> Self {
        Self {
            workflow: WorkflowState::new(tone),
            toasts: Vec::new(),
            example_cursor: 0,
        }
    }

    pub fn push_toast(&mut self, title: impl ToString, description: impl ToString) {
        self.toasts.push(Toast {
            title: title.to_string(),
            description: description.to_string(),
            created_at: Instant::now(),
        });
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn expire_toasts(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.expired());
        self.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GENERIC_REMOTE_ERROR, UNREACHABLE_ERROR};

    #[test]
    fn test_successful_rewrite_cycle() {
        // Scenario: friendly tone, non-empty input, backend succeeds.
        let mut wf = WorkflowState::new(Tone::Friendly);
        wf.set_input("Hi team, send the report.");

        let prompt = wf.begin_rewrite().expect("non-empty input must dispatch");
        assert_eq!(
            prompt,
            "Rewrite the following email with a friendly tone: \"Hi team, send the report.\""
        );
        assert_eq!(wf.prompt_preview, prompt);
        assert_eq!(wf.phase, Phase::Loading);

        wf.resolve_rewrite(Ok("Hey team! Could you send over that report?".to_string()));
        assert_eq!(wf.phase, Phase::Success);
        assert_eq!(wf.rewritten_text, "Hey team! Could you send over that report?");
        assert_eq!(wf.error_message, None);
    }

    #[test]
    fn test_empty_input_never_dispatches() {
        let mut wf = WorkflowState::new(Tone::Professional);

        assert_eq!(wf.begin_rewrite(), None);
        assert_eq!(wf.phase, Phase::Error);
        assert_eq!(wf.error_message.as_deref(), Some(EMPTY_INPUT_MSG));
        assert!(wf.prompt_preview.is_empty());
    }

    #[test]
    fn test_whitespace_only_input_never_dispatches() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.set_input("   \n  ");

        assert_eq!(wf.begin_rewrite(), None);
        assert_eq!(wf.phase, Phase::Error);
        assert_eq!(wf.error_message.as_deref(), Some(EMPTY_INPUT_MSG));
    }

    #[test]
    fn test_retrigger_while_loading_is_ignored() {
        let mut wf = WorkflowState::new(Tone::Casual);
        wf.set_input("Hello");
        let first = wf.begin_rewrite().unwrap();

        // Edit input mid-flight, then re-trigger: no second dispatch and
        // the preview must not move.
        wf.push_str(" world");
        assert_eq!(wf.begin_rewrite(), None);
        assert_eq!(wf.prompt_preview, first);
        assert_eq!(wf.phase, Phase::Loading);
    }

    #[test]
    fn test_remote_error_surfaces_its_message() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.set_input("Hello");
        wf.rewritten_text = "stale output".to_string();
        wf.begin_rewrite().unwrap();

        wf.resolve_rewrite(Err(GenerationError::Remote("model overloaded".to_string())));
        assert_eq!(wf.phase, Phase::Error);
        assert_eq!(wf.error_message.as_deref(), Some("model overloaded"));
        assert_eq!(wf.rewritten_text, "");
    }

    #[test]
    fn test_unreachable_error_surfaces_fixed_message() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.set_input("Hello");
        wf.begin_rewrite().unwrap();

        wf.resolve_rewrite(Err(GenerationError::Unreachable(
            UNREACHABLE_ERROR.to_string(),
        )));
        assert_eq!(wf.phase, Phase::Error);
        assert_eq!(wf.error_message.as_deref(), Some(UNREACHABLE_ERROR));
        assert_eq!(wf.rewritten_text, "");
    }

    #[test]
    fn test_generic_remote_error_message() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.set_input("Hello");
        wf.begin_rewrite().unwrap();

        wf.resolve_rewrite(Err(GenerationError::Remote(
            GENERIC_REMOTE_ERROR.to_string(),
        )));
        assert_eq!(wf.error_message.as_deref(), Some(GENERIC_REMOTE_ERROR));
    }

    #[test]
    fn test_clear_error_is_idempotent_and_narrow() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.begin_rewrite();
        assert_eq!(wf.phase, Phase::Error);

        wf.clear_error();
        let after_once = wf.clone();
        wf.clear_error();

        assert_eq!(wf.error_message, None);
        assert_eq!(wf.phase, after_once.phase);
        assert_eq!(wf.source_text, after_once.source_text);
        assert_eq!(wf.rewritten_text, after_once.rewritten_text);
    }

    #[test]
    fn test_edits_and_tone_changes_clear_error() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.begin_rewrite();
        assert!(wf.error_message.is_some());
        wf.push_char('H');
        assert_eq!(wf.error_message, None);

        wf.begin_rewrite(); // "H" is valid now, goes Loading
        wf.resolve_rewrite(Err(GenerationError::Remote("boom".to_string())));
        assert!(wf.error_message.is_some());
        wf.change_tone(Tone::Formal);
        assert_eq!(wf.error_message, None);
        // Tone change does not touch the phase.
        assert_eq!(wf.phase, Phase::Error);
    }

    #[test]
    fn test_input_is_capped_at_collection_point() {
        let mut wf = WorkflowState::new(Tone::Professional);
        let long = "a".repeat(MAX_EMAIL_CHARS + 500);

        wf.set_input(&long);
        assert_eq!(wf.char_count(), MAX_EMAIL_CHARS);

        wf.push_char('b');
        assert_eq!(wf.char_count(), MAX_EMAIL_CHARS);

        wf.clear_input();
        wf.push_str(&long);
        assert_eq!(wf.char_count(), MAX_EMAIL_CHARS);
    }

    #[test]
    fn test_clear_input_resets_text_and_error() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.set_input("Hello");
        wf.begin_rewrite().unwrap();
        wf.resolve_rewrite(Err(GenerationError::Remote("boom".to_string())));

        wf.clear_input();
        assert_eq!(wf.source_text, "");
        assert_eq!(wf.error_message, None);
    }

    #[test]
    fn test_set_error_is_narrow() {
        let mut wf = WorkflowState::new(Tone::Professional);
        wf.set_input("Hello");
        wf.begin_rewrite().unwrap();
        wf.resolve_rewrite(Ok("done".to_string()));

        wf.set_error("Failed to copy to clipboard.");
        assert_eq!(
            wf.error_message.as_deref(),
            Some("Failed to copy to clipboard.")
        );
        // Phase and output survive; only the message changes.
        assert_eq!(wf.phase, Phase::Success);
        assert_eq!(wf.rewritten_text, "done");

        wf.clear_error();
        assert_eq!(wf.error_message, None);
    }

    #[test]
    fn test_can_copy_requires_output() {
        let mut wf = WorkflowState::new(Tone::Professional);
        assert!(!wf.can_copy());
        wf.resolve_rewrite(Ok("done".to_string()));
        assert!(wf.can_copy());
    }

    #[test]
    fn test_toast_expiry() {
        let mut state = AppState::new(Tone::Professional);
        state.push_toast("Tone Updated", "Email tone set to Friendly");
        assert!(!state.expire_toasts());
        assert_eq!(state.toasts.len(), 1);

        // Backdate past the TTL.
        state.toasts[0].created_at =
            Instant::now() - std::time::Duration::from_secs(TOAST_TTL_SECS + 1);
        assert!(state.expire_toasts());
        assert!(state.toasts.is_empty());
    }
}
