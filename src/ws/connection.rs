//! WebSocket connection loop.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming commands to the [`DrawService`] and forwarding
//! every registry event to the client.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::broadcast;

use super::messages::{WsCommand, WsMessage, WsMessageType};
use crate::api::dto::{ParticipantsResponse, RegistryStateResponse};
use crate::domain::RegistryEvent;
use crate::error::ApiError;
use crate::service::DrawService;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads commands from the client and answers each with a `response` or
///   `error` message carrying the client's `id`.
/// - Forwards every [`RegistryEvent`] as an `event` message, including
///   those caused by this connection's own commands.
pub async fn run_connection(
    socket: WebSocket,
    mut event_rx: broadcast::Receiver<RegistryEvent>,
    draw_service: Arc<DrawService>,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = handle_text_message(text.as_str(), &draw_service).await;
                        if ws_tx.send(Message::text(response.to_json())).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(error = %err, "ws read failed");
                        break;
                    }
                    _ => {}
                }
            }
            event = event_rx.recv() => {
                match event {
                    Ok(registry_event) => {
                        let msg = WsMessage::new(
                            uuid::Uuid::new_v4().to_string(),
                            WsMessageType::Event,
                            payload_value(&registry_event, "registry event"),
                        );
                        if ws_tx.send(Message::text(msg.to_json())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}

/// Parses and executes one client message, returning the reply envelope.
pub async fn handle_text_message(text: &str, draw_service: &DrawService) -> WsMessage {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        return error_message(String::new(), &ApiError::InvalidRequest("malformed JSON".into()));
    };

    if msg.msg_type != WsMessageType::Command {
        return error_message(
            msg.id,
            &ApiError::InvalidRequest("expected a command message".into()),
        );
    }

    let command = match serde_json::from_value::<WsCommand>(msg.payload) {
        Ok(command) => command,
        Err(err) => {
            return error_message(
                msg.id,
                &ApiError::InvalidRequest(format!("unknown command: {err}")),
            );
        }
    };

    match execute(command, draw_service).await {
        Ok(payload) => WsMessage::new(msg.id, WsMessageType::Response, payload),
        Err(err) => error_message(msg.id, &err),
    }
}

async fn execute(
    command: WsCommand,
    draw_service: &DrawService,
) -> Result<serde_json::Value, ApiError> {
    let payload = match command {
        WsCommand::Add { name } => {
            let participants = draw_service.add(&name).await?;
            serde_json::to_value(ParticipantsResponse::from(participants))
        }
        WsCommand::Draw => {
            let outcome = draw_service.draw().await?;
            Ok(serde_json::json!({
                "winner": outcome.winner,
                "participant_count": outcome.participant_count,
                "reset_available": true,
            }))
        }
        WsCommand::Reset => {
            let snapshot = draw_service.reset().await;
            serde_json::to_value(RegistryStateResponse::from(snapshot))
        }
        WsCommand::GetState => {
            let snapshot = draw_service.snapshot().await;
            serde_json::to_value(RegistryStateResponse::from(snapshot))
        }
    };
    payload.map_err(|e| ApiError::Internal(e.to_string()))
}

fn error_message(id: String, err: &ApiError) -> WsMessage {
    WsMessage::new(
        id,
        WsMessageType::Error,
        payload_value(&err.to_body(), "error body"),
    )
}

/// Serializes an outgoing payload, falling back to `null` after logging.
fn payload_value<T: Serialize>(value: &T, what: &str) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, payload = what, "ws payload serialization failed");
        serde_json::Value::Null
    })
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::{EventBus, ScriptedRandom};

    fn service() -> DrawService {
        DrawService::new(Box::new(ScriptedRandom::fixed(1)), EventBus::new(16))
    }

    fn command(id: &str, payload: serde_json::Value) -> String {
        serde_json::json!({ "id": id, "type": "command", "payload": payload }).to_string()
    }

    #[test]
    fn unserializable_payload_falls_back_to_null() {
        let mut map = std::collections::HashMap::new();
        map.insert((1_u8, 2_u8), "pair");
        assert_eq!(payload_value(&map, "test map"), serde_json::Value::Null);
        assert_eq!(
            payload_value(&serde_json::json!({ "ok": true }), "test object"),
            serde_json::json!({ "ok": true })
        );
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let reply = handle_text_message("{not json", &service()).await;
        assert_eq!(reply.msg_type, WsMessageType::Error);
        assert_eq!(reply.payload["code"], 1002);
    }

    #[tokio::test]
    async fn non_command_type_is_rejected() {
        let raw = serde_json::json!({ "id": "x", "type": "event", "payload": {} }).to_string();
        let reply = handle_text_message(&raw, &service()).await;
        assert_eq!(reply.msg_type, WsMessageType::Error);
        assert_eq!(reply.id, "x");
    }

    #[tokio::test]
    async fn add_replies_with_list() {
        let svc = service();
        let raw = command("c1", serde_json::json!({ "command": "add", "name": " Ana " }));
        let reply = handle_text_message(&raw, &svc).await;
        assert_eq!(reply.msg_type, WsMessageType::Response);
        assert_eq!(reply.id, "c1");
        assert_eq!(reply.payload["participants"], serde_json::json!(["Ana"]));
    }

    #[tokio::test]
    async fn duplicate_add_replies_with_error_kind() {
        let svc = service();
        let _ = svc.add("Ana").await;
        let raw = command("c2", serde_json::json!({ "command": "add", "name": "ana" }));
        let reply = handle_text_message(&raw, &svc).await;
        assert_eq!(reply.msg_type, WsMessageType::Error);
        assert_eq!(reply.payload["kind"], "duplicate_name");
    }

    #[tokio::test]
    async fn draw_then_state_then_reset() {
        let svc = service();
        let _ = svc.add("Ana").await;
        let _ = svc.add("Beto").await;

        let draw = command("d", serde_json::json!({ "command": "draw" }));
        let reply = handle_text_message(&draw, &svc).await;
        assert_eq!(reply.payload["winner"], "Beto");

        let state = command("s", serde_json::json!({ "command": "get_state" }));
        let reply = handle_text_message(&state, &svc).await;
        assert_eq!(reply.payload["phase"], "drawn");
        assert_eq!(reply.payload["reset_available"], true);

        let reset = command("r", serde_json::json!({ "command": "reset" }));
        let reply = handle_text_message(&reset, &svc).await;
        assert_eq!(reply.payload["count"], 0);
        assert_eq!(reply.payload["phase"], "collecting");
    }

    #[tokio::test]
    async fn draw_with_too_few_is_error() {
        let draw = command("d", serde_json::json!({ "command": "draw" }));
        let reply = handle_text_message(&draw, &service()).await;
        assert_eq!(reply.msg_type, WsMessageType::Error);
        assert_eq!(reply.payload["kind"], "insufficient_participants");
    }
}
