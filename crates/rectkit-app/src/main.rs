mod app_state;
mod cli;
mod scene;
mod snapshot;

use std::path::PathBuf;
use std::process::ExitCode;

use rectkit_config::schema::RectkitConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "rectkit=info";

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config decides the log level, so it is loaded before logging exists
    // and its outcome is reported afterwards.
    let loaded = match &args.config {
        Some(path) => rectkit_config::load_config_from(path),
        None => rectkit_config::load_config(),
    };
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("rectkit={}", config_level.as_directive()));
    init_logging(&log_directive);

    tracing::info!("rectkit v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => {
            tracing::info!(
                "Config loaded ({}x{}, blend: {:?}, filter: {:?})",
                config.window.width,
                config.window.height,
                config.renderer.blend,
                config.atlas.filter,
            );
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            RectkitConfig::default()
        }
    };

    if args.print_config {
        println!("{}", rectkit_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let atlas_path: Option<PathBuf> = args
        .atlas
        .clone()
        .or_else(|| config.atlas.path.as_ref().map(PathBuf::from));

    if let Some(out) = &args.snapshot {
        let width = args.width.unwrap_or(config.window.width);
        let height = args.height.unwrap_or(config.window.height);
        return match snapshot::render_snapshot(&config, atlas_path.as_deref(), width, height, out) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Snapshot failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::RectkitApp::new(config, atlas_path);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
