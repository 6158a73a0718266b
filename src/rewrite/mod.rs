//! The rewrite pipeline: validation, prompt construction, and the
//! asynchronous call to the generation endpoint
//!
//! One rewrite attempt is validate → build prompt → call backend. The
//! actor owns the HTTP client so the application loop never blocks on the
//! network.

mod actor;
mod client;
mod prompt;
mod validate;

pub use actor::{RewriteActorHandle, RewriteCommand, RewriteEvent, spawn_rewrite_actor};
pub use client::{GenerationClient, GenerationError};
pub use prompt::build_prompt;
pub use validate::{ValidationError, validate};
