//! Application core - owns the workflow state and coordinates the
//! rewrite actor, preferences, and rendering

mod actions;
mod event_loop;
pub mod render_thread;
pub mod state;

use std::time::Duration;

use anyhow::Result;

use render_thread::RenderThread;

use crate::config::Config;
use crate::input::KeyBindings;
use crate::prefs::PreferenceStore;
use crate::rewrite::{GenerationClient, RewriteActorHandle, RewriteCommand, spawn_rewrite_actor};
use state::AppState;

pub struct App {
    pub(crate) config: Config,
    pub(crate) prefs: PreferenceStore,
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    /// Actor handle owning the HTTP client
    pub(crate) rewrite: RewriteActorHandle,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let prefs = PreferenceStore::open()?;

        // Initial tone comes from the preference store (or its default).
        let state = AppState::new(prefs.load_tone());

        let client = GenerationClient::new(
            config.generation.endpoint.clone(),
            Duration::from_secs(config.generation.timeout_secs),
        );
        let rewrite = spawn_rewrite_actor(client);

        Ok(Self {
            config,
            prefs,
            state,
            bindings: KeyBindings::new(),
            rewrite,
            dirty: true, // Start dirty for initial render
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        let result = self.event_loop(&render_thread).await;

        // Shutdown render thread (handles terminal cleanup)
        render_thread.shutdown();

        // Shutdown the rewrite actor
        self.rewrite.cmd_tx.send(RewriteCommand::Shutdown).await.ok();

        result
    }
}
