//! Server lifecycle

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve `router` on `listener` until `shutdown` is cancelled.
///
/// In-flight requests are allowed to complete after shutdown begins; their
/// dispatches observe the same token through the dispatcher and return early.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Server stopped");
    Ok(())
}
