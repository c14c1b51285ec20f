//! gRPC server setup with health check and reflection.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::server::Router;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

use userdir_core::UserDirectory;

use crate::pb::{user_service_server::UserServiceServer, FILE_DESCRIPTOR_SET};
use crate::service::UserServiceImpl;

type ServerError = Box<dyn std::error::Error + Send + Sync>;

/// Register health, reflection and the UserService on a fresh router.
async fn build_router(directory: Arc<UserDirectory>) -> Result<Router, ServerError> {
    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<UserServiceServer<UserServiceImpl>>()
        .await;

    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    info!(users = directory.len(), "UserService registered");
    let user_service = UserServiceImpl::new(directory);

    Ok(Server::builder()
        .add_service(health_service)
        .add_service(reflection_service)
        .add_service(UserServiceServer::new(user_service)))
}

/// Run the gRPC server with health check and reflection until it fails.
pub async fn run_server(addr: SocketAddr, directory: Arc<UserDirectory>) -> Result<(), ServerError> {
    info!("Starting gRPC server on {}", addr);

    let router = build_router(directory).await?;

    info!("gRPC server ready on {}", addr);
    router.serve(addr).await?;

    Ok(())
}

/// Run the gRPC server with graceful shutdown support.
///
/// Accepts a shutdown signal future that, when resolved, stops accepting
/// connections and lets in-flight requests finish.
pub async fn run_server_with_shutdown<F>(
    addr: SocketAddr,
    directory: Arc<UserDirectory>,
    shutdown_signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting gRPC server on {} (with graceful shutdown)", addr);

    let router = build_router(directory).await?;

    info!("gRPC server ready on {}", addr);
    router.serve_with_shutdown(addr, shutdown_signal).await?;

    info!("gRPC server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_server_starts_and_shuts_down() {
        let directory = Arc::new(UserDirectory::with_builtin_seed());
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server_handle = tokio::spawn(async move {
            run_server_with_shutdown(addr, directory, async {
                rx.await.ok();
            })
            .await
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send(()).ok();

        let result = timeout(Duration::from_secs(5), server_handle).await;
        assert!(result.is_ok());
    }
}
