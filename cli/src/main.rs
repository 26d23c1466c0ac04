//! CLI entrypoint for liveqa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use liveqa_application::{AnswerLogger, AnswerProducer, QuestionDispatcher};
use liveqa_infrastructure::{
    ConfigLoader, FileConfig, JsonlAnswerLogger, ProducerDescriptor, http_client,
    two_stage_producer,
};
use liveqa_presentation::{AppState, Cli, build_router, serve};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    info!("Starting liveqa as {}", config.pid);

    // === Dependency Injection ===
    let client = http_client(config.request_timeout()).context("Failed to build HTTP client")?;

    let mut producers: Vec<Arc<dyn AnswerProducer>> = Vec::with_capacity(config.producers.len());
    for path in &config.producers {
        let descriptor = ProducerDescriptor::load(path)?;
        let name = producer_name(path);
        info!(
            "Producer {}: retriever {}, summarizer {}",
            name, descriptor.retriever_url, descriptor.summarizer_url
        );
        producers.push(Arc::new(two_stage_producer(
            name,
            &descriptor,
            client.clone(),
            config.answer_params(),
        )));
    }

    let shutdown = CancellationToken::new();
    let mut dispatcher = QuestionDispatcher::new(producers, config.dispatch_params())?
        .with_cancellation(shutdown.clone());

    if let Some(path) = &config.answer_log {
        match JsonlAnswerLogger::new(path) {
            Some(logger) => {
                info!("Answer log: {}", logger.path().display());
                dispatcher = dispatcher.with_logger(Arc::new(logger) as Arc<dyn AnswerLogger>);
            }
            None => warn!("Answer log disabled"),
        }
    }

    // === Serve ===
    let listener = TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
        }
        signal_token.cancel();
    });

    serve(listener, build_router(AppState::new(dispatcher)), shutdown).await?;

    Ok(())
}

/// Initialize tracing from `-v` (or `RUST_LOG` when no `-v` is given).
///
/// The returned guard must be held until exit so buffered file output is flushed.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Command-line flags take precedence over every configuration source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(listen) = &cli.listen {
        config.listen = listen.clone();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if !cli.producer.is_empty() {
        config.producers = cli.producer.clone();
    }
    if let Some(answer_log) = &cli.answer_log {
        config.answer_log = Some(answer_log.clone());
    }
}

/// Producer names come from the descriptor file stem.
fn producer_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
