//! Shared utilities for integration tests.

use std::net::SocketAddr;

use donation_market::config::AppConfig;
use donation_market::{AppServer, Shutdown};
use tokio::net::TcpListener;

/// Start the server on an ephemeral port.
///
/// The listener is bound before this returns, so requests can be sent
/// immediately. Trigger the returned `Shutdown` to stop the server.
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = AppServer::new(config).unwrap();
    let server_shutdown = shutdown.signal();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// `Location` header of a response, if any.
pub fn location(res: &reqwest::Response) -> Option<String> {
    res.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
