use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::services::ServeDir;

/// Serves `site/` on a random local port for the lifetime of the value.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let root = site_root();
        if !root.join("pkg").join("web.js").exists() {
            anyhow::bail!(
                "{} has no wasm bundle; run `wasm-pack build packages/web --target web --out-dir ../../site/pkg` first",
                root.display()
            );
        }

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind a local port")?;
        let addr = listener.local_addr()?;
        let (shutdown, stopped) = oneshot::channel::<()>();

        let app = Router::new().fallback_service(ServeDir::new(root));
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    stopped.await.ok();
                })
                .await
                .ok();
        });

        let server = Self {
            addr,
            shutdown: Some(shutdown),
        };
        wait_for_server(&server.url()).await?;
        Ok(server)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn site_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../site")
}

async fn wait_for_server(url: &str) -> Result<()> {
    for _ in 0..50 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("static server did not answer within 5s")
}
