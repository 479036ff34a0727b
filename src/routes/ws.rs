//! WebSocket upgrade + session loop. Each connection owns one `Session`; client
//! messages are parsed as JSON, applied to it, and answered with one JSON message.
//! Generation runs in a background task whose result is pushed when it lands.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tokio::sync::mpsc;
use tracing::{info, error, instrument, debug};

use crate::generator::{GenerateError, GeneratedDesign};
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::session::{Action, Session};
use crate::state::AppState;

type GenerationResult = Result<GeneratedDesign, GenerateError>;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "rangoli_studio", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Serialize and send; false when the socket is gone.
async fn send(socket: &mut WebSocket, msg: &ServerWsMessage) -> bool {
  let out = serde_json::to_string(msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  });
  match socket.send(Message::Text(out)).await {
    Ok(()) => true,
    Err(e) => {
      error!(target: "rangoli_studio", error = %e, "WS send error");
      false
    }
  }
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  let mut session = match Session::new(state.catalog.clone()) {
    Ok(s) => s,
    Err(e) => {
      error!(target: "rangoli_studio", error = %e, "Cannot open session");
      let _ = send(&mut socket, &ServerWsMessage::Error { message: e.to_string() }).await;
      return;
    }
  };
  info!(target: "rangoli_studio", session = %session.id, "WebSocket connected");

  let (tx, mut rx) = mpsc::channel::<GenerationResult>(1);

  // Initial snapshot of the default tab.
  if !send(&mut socket, &session.gallery()).await {
    return;
  }

  loop {
    tokio::select! {
      incoming = socket.recv() => {
        let Some(Ok(msg)) = incoming else { break };
        match msg {
          Message::Text(txt) => {
            let reply = match serde_json::from_str::<ClientWsMessage>(&txt) {
              Ok(incoming) => {
                debug!(target: "rangoli_studio", session = %session.id, "WS received: {:?}", &incoming);
                match session.handle(incoming, &state.prompt_suggestions) {
                  Action::Reply(reply) => reply,
                  Action::StartGeneration { params, ack } => {
                    // Detached: a disconnect does not cancel a running generation.
                    let generator = state.generator.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                      let result = generator.generate(&params).await;
                      let _ = tx.send(result).await;
                    });
                    ack
                  }
                }
              }
              Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
            };
            if !send(&mut socket, &reply).await {
              break;
            }
          }
          Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
          Message::Close(_) => break,
          _ => {}
        }
      }
      Some(result) = rx.recv() => {
        let reply = session.finish_generation(result);
        if !send(&mut socket, &reply).await {
          break;
        }
      }
    }
  }
  info!(target: "rangoli_studio", session = %session.id, "WebSocket disconnected");
}
