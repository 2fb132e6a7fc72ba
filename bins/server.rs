use configs::{AppConfig, RunMode};
use dotenvy::dotenv;
use server::errors::StartupError;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(mode: RunMode) {
    match mode {
        RunMode::Release => common::utils::logging::init_logging_json(),
        RunMode::Debug => common::utils::logging::init_logging_verbose(),
        RunMode::Test => common::utils::logging::init_logging_default(),
    }
    info!(service = "server", event = "logger_init", %mode, "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // load .env first so PORT / APP_MODE / RUST_LOG take effect
    dotenv().ok();

    let config = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            StartupError::InvalidConfig(e.to_string()).log();
            return std::process::ExitCode::FAILURE;
        }
    };
    init_logging(config.mode);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = config.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        port = config.server.port,
        threads = worker_threads.unwrap_or_default(),
        "server service starting"
    );

    rt.block_on(async move {
        match server::run(config).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
