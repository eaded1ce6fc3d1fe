use crate::infra::logging::{error, info};
use std::future::Future;

/// Resolves once `signal` fires.
///
/// If the signal listener could not be installed the error is logged and the returned
/// future never resolves, so the server keeps serving until the process is killed.
pub async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
