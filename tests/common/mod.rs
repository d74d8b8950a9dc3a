//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tokio::net::TcpListener;

use segment_relay::lifecycle::Shutdown;
use segment_relay::segment::Segment;
use segment_relay::{HttpServer, RelayConfig};

/// Segments observed by a mock channel, in arrival order.
pub type Received = Arc<Mutex<Vec<Segment>>>;

#[derive(Clone)]
struct ChannelState {
    received: Received,
    statuses: Arc<Mutex<Vec<u16>>>,
}

/// Start a mock channel service on a loopback port.
///
/// The nth transfer is answered with the nth scripted status; once the
/// script runs out, every transfer is answered with 200. Every decoded
/// segment is recorded, whatever the answer.
pub async fn start_mock_channel(statuses: Vec<u16>) -> (SocketAddr, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let state = ChannelState {
        received: received.clone(),
        statuses: Arc::new(Mutex::new(statuses)),
    };

    let app = Router::new()
        .route("/transfer", post(transfer_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, received)
}

async fn transfer_handler(
    State(state): State<ChannelState>,
    Json(segment): Json<Segment>,
) -> StatusCode {
    state.received.lock().unwrap().push(segment);

    let mut statuses = state.statuses.lock().unwrap();
    let status = if statuses.is_empty() {
        200
    } else {
        statuses.remove(0)
    };
    StatusCode::from_u16(status).unwrap()
}

/// Start the relay server against the given channel URL.
///
/// The returned `Shutdown` must be kept alive for the duration of the test;
/// dropping it stops the server.
pub async fn start_relay(channel_url: String) -> (SocketAddr, Shutdown) {
    let config = RelayConfig {
        bind_address: "127.0.0.1:0".to_string(),
        channel_url,
        startup_delay_secs: 0,
    };

    let listener = TcpListener::bind(&config.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    (addr, shutdown)
}

/// Pick a loopback port with nothing listening on it.
#[allow(dead_code)]
pub async fn unused_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
