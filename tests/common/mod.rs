//! Shared helpers: start the real router on an ephemeral port.

#![allow(dead_code, clippy::panic)]

use std::net::SocketAddr;

use secret_friend::api::build_app;
use secret_friend::app_state::AppState;
use secret_friend::domain::ScriptedRandom;

/// Running test server.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
}

impl TestServer {
    /// `http://` URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// `ws://` URL of the WebSocket endpoint.
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

/// Starts a server whose draws replay `script`.
pub async fn spawn_server(script: Vec<usize>) -> TestServer {
    let state = AppState::new(Box::new(ScriptedRandom::new(script)), 64);
    let app = build_app(state.clone());

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has no local address");
    };

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    TestServer { addr, state }
}
