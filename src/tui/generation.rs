//! Background prompt-to-theme generation.
//!
//! The adapter call runs on its own thread with a single-threaded tokio
//! runtime; the result comes back over a channel that the main loop polls
//! every frame, so the UI never blocks on the network.

use anyhow::{Context, Result};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::models::ThemeSuggestion;
use crate::services::PromptToThemeAdapter;

/// Outcome of one generation request.
pub type GenerationOutcome = Result<ThemeSuggestion, String>;

/// Tracks at most one in-flight generation request.
#[derive(Default)]
pub struct GenerationJob {
    receiver: Option<Receiver<GenerationOutcome>>,
    prompt: Option<String>,
}

impl GenerationJob {
    /// Creates an idle job tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            receiver: None,
            prompt: None,
        }
    }

    /// Checks if a request is currently running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.receiver.is_some()
    }

    /// Prompt of the running request.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Starts a request in the background.
    ///
    /// Fails if a request is already in flight.
    pub fn start(&mut self, adapter: Arc<dyn PromptToThemeAdapter>, prompt: String) -> Result<()> {
        if self.is_running() {
            anyhow::bail!("Generation already in progress");
        }

        let (sender, receiver) = channel();
        let thread_prompt = prompt.clone();

        thread::Builder::new()
            .name("theme-generation".to_string())
            .spawn(move || {
                let outcome = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| format!("Failed to start async runtime: {e}"))
                    .and_then(|runtime| {
                        runtime
                            .block_on(adapter.generate(&thread_prompt))
                            .map_err(|e| e.to_string())
                    });
                // The receiver is gone if the app quit first
                let _ = sender.send(outcome);
            })
            .context("Failed to spawn generation thread")?;

        self.receiver = Some(receiver);
        self.prompt = Some(prompt);
        Ok(())
    }

    /// Polls for a finished request.
    ///
    /// Returns the outcome once; the job is idle again afterwards.
    pub fn poll(&mut self) -> Option<GenerationOutcome> {
        let receiver = self.receiver.as_ref()?;
        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err("Generation thread exited unexpectedly".to_string()),
        };
        self.receiver = None;
        self.prompt = None;
        Some(outcome)
    }
}
