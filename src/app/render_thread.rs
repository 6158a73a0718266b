//! Background render thread for non-blocking UI rendering.
//!
//! The render thread owns the Terminal and renders snapshots of AppState
//! sent from the main event loop. This keeps the event loop responsive
//! to rewrite completions and user input.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

/// Command sent to the render thread.
pub enum RenderCommand {
    /// Render this state snapshot
    Render(Box<AppState>),
    /// Shutdown the render thread
    Shutdown,
}

/// Owns the terminal for the lifetime of the render loop. Raw mode, the
/// alternate screen, and bracketed paste are restored on drop, including
/// the unwind path when a draw panics.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn open() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        // Bracketed paste: pasting an email is the primary input gesture
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            disable_raw_mode().ok();
            return Err(e);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                disable_raw_mode().ok();
                return Err(e);
            }
        };

        Ok(Self { terminal })
    }

    fn draw(&mut self, state: &AppState) {
        if let Err(e) = self.terminal.draw(|f| crate::ui::render(f, state)) {
            tracing::error!("Render error: {}", e);
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )
        .ok();
    }
}

/// Handle to the background render thread.
pub struct RenderThread {
    /// Channel to send render commands
    cmd_tx: SyncSender<RenderCommand>,
    /// Thread join handle
    handle: Option<JoinHandle<()>>,
}

impl RenderThread {
    /// Spawn a new render thread.
    ///
    /// The render thread takes ownership of terminal setup/teardown.
    /// Returns the handle for sending render commands.
    pub fn spawn() -> io::Result<Self> {
        // Channel with capacity 1 - we only care about the latest state
        let (cmd_tx, cmd_rx) = mpsc::sync_channel::<RenderCommand>(1);

        let handle = thread::spawn(move || {
            let mut session = match TerminalSession::open() {
                Ok(session) => session,
                Err(e) => {
                    tracing::error!("Failed to set up terminal: {}", e);
                    return;
                }
            };

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    RenderCommand::Render(state) => session.draw(&state),
                    RenderCommand::Shutdown => break,
                }
            }
            // Session drop restores the terminal
        });

        Ok(Self {
            cmd_tx,
            handle: Some(handle),
        })
    }

    /// Request a render of the given state (non-blocking).
    ///
    /// If the render thread is busy, the previous pending frame is replaced.
    /// This is intentional - we always want to render the latest state.
    pub fn render(&self, state: AppState) {
        match self.cmd_tx.try_send(RenderCommand::Render(Box::new(state))) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                // Channel full - render thread is busy, frame will be skipped
                tracing::trace!("Render thread busy, skipping frame");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Render thread disconnected");
            }
        }
    }

    /// Shutdown the render thread and wait for it to finish.
    pub fn shutdown(mut self) {
        // Send shutdown command (blocking to ensure it's received)
        let _ = self.cmd_tx.send(RenderCommand::Shutdown);

        // Wait for thread to finish
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}
