//! Verdict HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use verdict::analysis::{GrammarChecker, LanguageToolChecker, LexiconSentiment, StubGrammarChecker};
use verdict::config::Config;
use verdict::corpus::CorpusStore;
use verdict::embedding::{MiniLmConfig, MiniLmEmbedder};
use verdict::extract::PdfTextExtractor;
use verdict::gateway::{HandlerState, create_router_with_state};
use verdict::pipeline::{AppContext, Collaborators};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
 _   _ ___ ___ ___  ___ ___ _____
| | | | __| _ \   \|_ _/ __|_   _|
| |_| | _||   / |) || | (__  | |
 \___/|___|_|_\___/|___\___| |_|

        READ. SCORE. DECIDE.
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        corpus = %config.corpus_path.display(),
        "Verdict starting"
    );

    let store = CorpusStore::load(&config.corpus_path)?;

    let minilm_config = if let Some(path) = &config.model_path {
        MiniLmConfig::new(path.clone())
    } else {
        tracing::warn!("No VERDICT_MODEL_PATH configured, running embedder in stub mode");
        MiniLmConfig::stub()
    };
    let embedder = MiniLmEmbedder::load(minilm_config)?;

    let grammar: Arc<dyn GrammarChecker> = match &config.languagetool_url {
        Some(url) => Arc::new(LanguageToolChecker::new(url)?),
        None => {
            tracing::warn!(
                "No VERDICT_LANGUAGETOOL_URL configured, grammar checker reports zero issues"
            );
            Arc::new(StubGrammarChecker::new())
        }
    };

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let collaborators = Collaborators {
        extractor: Arc::new(PdfTextExtractor::new()),
        embedder: Arc::new(embedder),
        grammar,
        sentiment: Arc::new(LexiconSentiment::new()),
    };

    tracing::info!("Building corpus index...");
    let policy = config.policy.clone();
    let timeout = config.request_timeout;
    let context = tokio::task::spawn_blocking(move || {
        AppContext::new(collaborators, &store, policy, timeout)
    })
    .await??;

    let state = HandlerState::from_config(Arc::new(context), &config);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Verdict shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("VERDICT_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
