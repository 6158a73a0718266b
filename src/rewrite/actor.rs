//! Rewrite actor for async processing of generation requests

use tokio::sync::mpsc;

use super::client::{GenerationClient, GenerationError};

/// Commands that can be sent to the rewrite actor
#[derive(Debug)]
pub enum RewriteCommand {
    /// Send this prompt to the generation endpoint
    Rewrite { prompt: String },
    /// Shutdown the actor
    Shutdown,
}

/// Events emitted by the rewrite actor
#[derive(Debug, Clone)]
pub enum RewriteEvent {
    /// Rewritten text ready
    Completed { text: String },
    /// The attempt failed; the error carries the user-visible message
    Failed(GenerationError),
}

/// Handle for communicating with the rewrite actor
pub struct RewriteActorHandle {
    pub cmd_tx: mpsc::Sender<RewriteCommand>,
    pub event_rx: mpsc::Receiver<RewriteEvent>,
}

/// Spawn the rewrite actor task.
///
/// Commands are processed one at a time, so at most one generation request
/// is in flight. No retries: each command resolves to exactly one event.
pub fn spawn_rewrite_actor(client: GenerationClient) -> RewriteActorHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel(4);

    tokio::spawn(rewrite_actor_loop(client, cmd_rx, event_tx));

    RewriteActorHandle { cmd_tx, event_rx }
}

async fn rewrite_actor_loop(
    client: GenerationClient,
    mut cmd_rx: mpsc::Receiver<RewriteCommand>,
    event_tx: mpsc::Sender<RewriteEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            RewriteCommand::Rewrite { prompt } => {
                let event = match client.generate(&prompt).await {
                    Ok(text) => RewriteEvent::Completed { text },
                    Err(e) => RewriteEvent::Failed(e),
                };
                if event_tx.send(event).await.is_err() {
                    tracing::warn!("Rewrite actor: event receiver dropped");
                    break;
                }
            }

            RewriteCommand::Shutdown => {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::constants::UNREACHABLE_ERROR;

    #[tokio::test]
    async fn test_rewrite_command_resolves_to_completed_event() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "Hey team! Could you send over that report?"
            })))
            .mount(&server)
            .await;

        let client = GenerationClient::new(
            format!("{}/api/generate", server.uri()),
            Duration::from_secs(2),
        );
        let mut handle = spawn_rewrite_actor(client);

        handle
            .cmd_tx
            .send(RewriteCommand::Rewrite {
                prompt: "anything".to_string(),
            })
            .await
            .unwrap();

        match handle.event_rx.recv().await.unwrap() {
            RewriteEvent::Completed { text } => {
                assert_eq!(text, "Hey team! Could you send over that report?");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_resolves_to_failed_event() {
        let client = GenerationClient::new(
            "http://127.0.0.1:1/api/generate".to_string(),
            Duration::from_secs(2),
        );
        let mut handle = spawn_rewrite_actor(client);

        handle
            .cmd_tx
            .send(RewriteCommand::Rewrite {
                prompt: "anything".to_string(),
            })
            .await
            .unwrap();

        match handle.event_rx.recv().await.unwrap() {
            RewriteEvent::Failed(e) => assert_eq!(e.message(), UNREACHABLE_ERROR),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_actor() {
        let client = GenerationClient::new(
            "http://127.0.0.1:1/api/generate".to_string(),
            Duration::from_secs(2),
        );
        let mut handle = spawn_rewrite_actor(client);

        handle.cmd_tx.send(RewriteCommand::Shutdown).await.unwrap();

        // Event channel closes once the loop exits.
        assert!(handle.event_rx.recv().await.is_none());
    }
}
