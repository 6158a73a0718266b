//! Main event loop and rewrite event processing

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::constants::{POLL_IDLE_MS, POLL_LOADING_MS};
use crate::input::{InputResult, handle_input};
use crate::rewrite::RewriteEvent;

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Process rewrite completions FIRST (non-blocking)
            if self.process_rewrite_events() {
                self.dirty = true;
            }

            // Drop expired toasts
            if self.state.expire_toasts() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty {
                render_thread.render(self.state.clone());
                self.dirty = false;
            }

            // Handle input (faster polling while a request is in flight,
            // so the spinner and the completion stay snappy)
            let poll_timeout = if self.state.workflow.is_loading() {
                POLL_LOADING_MS
            } else {
                POLL_IDLE_MS
            };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => self.handle_action(action).await,
                    InputResult::Char(c) => self.state.workflow.push_char(c),
                    InputResult::Newline => self.state.workflow.push_char('\n'),
                    InputResult::Backspace => self.state.workflow.backspace(),
                    InputResult::Paste(text) => self.state.workflow.push_str(&text),
                    InputResult::Continue => {}
                }
            } else if self.state.workflow.is_loading() {
                // Keep the spinner animating while waiting on the backend.
                self.dirty = true;
            }
        }

        Ok(())
    }

    /// Process events from the rewrite actor (non-blocking).
    /// Returns true if any events were processed.
    ///
    /// The completion always applies, even when the user has edited tone
    /// or input since the request went out: the in-flight attempt is never
    /// cancelled or fenced, so a late response overwrites the output pane.
    pub(crate) fn process_rewrite_events(&mut self) -> bool {
        let mut had_events = false;
        while let Ok(event) = self.rewrite.event_rx.try_recv() {
            had_events = true;
            match event {
                RewriteEvent::Completed { text } => {
                    self.state.workflow.resolve_rewrite(Ok(text));
                    self.notify(
                        "Email Rewritten",
                        "Your email has been successfully rewritten!",
                    );
                }
                RewriteEvent::Failed(e) => {
                    tracing::debug!("Rewrite attempt failed: {}", e);
                    self.state.workflow.resolve_rewrite(Err(e));
                }
            }
        }
        had_events
    }
}
