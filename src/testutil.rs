//! Stub-backend helpers shared by the gateway tests.

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port, returning its base URL.
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("bound socket has an address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend serves");
    });

    format!("http://{addr}")
}

/// Base URL where nothing is listening (bound once, then released).
pub(crate) async fn dead_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("bound socket has an address");
    drop(listener);

    format!("http://{addr}")
}
