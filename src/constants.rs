//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers and fixed user-visible strings to make them
//! discoverable and configurable.

/// Maximum length of the source email in characters.
/// Enforced at the collection point; the validator never sees longer text.
pub const MAX_EMAIL_CHARS: usize = 2000;

/// Error shown when a rewrite is triggered with empty or whitespace-only input.
pub const EMPTY_INPUT_MSG: &str = "Please enter an email to rewrite.";

/// Fallback error for a non-2xx response without a usable error field.
pub const GENERIC_REMOTE_ERROR: &str = "Error generating rewritten email.";

/// Error shown when the endpoint is unreachable, times out, or returns
/// a body the client cannot interpret.
pub const UNREACHABLE_ERROR: &str = "Failed to connect to the server. Please try again.";

/// Default generation endpoint URL when no config file overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/generate";

/// Default HTTP request timeout in seconds for the generation endpoint.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Toast display duration in seconds before auto-dismiss.
pub const TOAST_TTL_SECS: u64 = 4;

/// Input poll timeout in milliseconds while a rewrite is in flight.
pub const POLL_LOADING_MS: u64 = 50;

/// Input poll timeout in milliseconds when idle.
pub const POLL_IDLE_MS: u64 = 150;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Minimum terminal width to show the two-column layout (input | output).
/// Below this width, panes are stacked vertically.
pub const MIN_SPLIT_VIEW_WIDTH: u16 = 80;

/// Canned example emails, cycled by the load-example action.
pub const EXAMPLE_EMAILS: [&str; 3] = [
    "Dear team, I need the project report by Friday. Please make sure all sections are complete.",
    "Hi Sarah, can we meet to discuss the marketing strategy for Q2?",
    "To whom it may concern, I am writing to express my interest in the Senior Developer position.",
];
