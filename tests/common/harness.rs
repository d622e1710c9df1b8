//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use verdict::corpus::{CorpusRecord, CorpusStore};
use verdict::gateway::{HandlerState, create_router_with_state};
use verdict::pipeline::{AppContext, Collaborators};
use verdict::scoring::ScoringPolicy;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;
const TEST_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    pub records: Vec<CorpusRecord>,
    pub policy: ScoringPolicy,
    pub max_upload_bytes: Option<usize>,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            records: default_records(),
            policy: ScoringPolicy::default(),
            max_upload_bytes: None,
        }
    }
}

impl TestServerConfig {
    pub fn with_records(mut self, records: Vec<CorpusRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = Some(max_upload_bytes);
        self
    }
}

/// Small labelled corpus shared by the end-to-end tests.
pub fn default_records() -> Vec<CorpusRecord> {
    vec![
        CorpusRecord::new(
            "Sparse attention for long documents",
            "We propose a sparse attention mechanism for transformer models on long documents.",
            true,
        ),
        CorpusRecord::new(
            "Graph neural networks for molecules",
            "Message passing networks predict molecular properties with high accuracy.",
            true,
        ),
        CorpusRecord::new(
            "A survey of everything",
            "This paper lists many things without evaluation.",
            false,
        ),
    ]
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    upload_dir: TempDir,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn upload_dir(&self) -> &std::path::Path {
        self.upload_dir.path()
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a fully-mocked test server.
///
/// | Component  | Implementation                          |
/// |------------|-----------------------------------------|
/// | Extractor  | `MockTextExtractor` (uploads are UTF-8) |
/// | Embedder   | Stub MiniLM (deterministic)             |
/// | Grammar    | Stub (zero issues)                      |
/// | Sentiment  | Lexicon                                 |
///
/// Uploads land in a temporary directory owned by the returned [`TestServer`].
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let port = if config.port == 0 {
        find_available_port().await?
    } else {
        config.port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let upload_dir =
        TempDir::new().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let store = CorpusStore::from_records(config.records);
    let context = AppContext::new(
        Collaborators::mock(),
        &store,
        config.policy,
        Duration::from_secs(TEST_REQUEST_TIMEOUT_SECS),
    )
    .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let mut state = HandlerState::new(Arc::new(context), upload_dir.path().to_path_buf());
    if let Some(limit) = config.max_upload_bytes {
        state = state.with_max_upload_bytes(limit);
    }

    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
        upload_dir,
    })
}
