mod app_state;
mod cli;
mod frame_loop;
mod headless;

use std::process::ExitCode;

use stardust_common::StardustError;
use stardust_config::StardustConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Fallback when both the CLI and the config carry an unusable directive.
const DEFAULT_LOG_DIRECTIVE: &str = "stardust=info";

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log directive {directive:?}, using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logging needs the config's filter, so load first and report after.
    let loaded = stardust_config::load_config(args.config.as_deref());
    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.filter.clone(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&log_directive);

    tracing::info!("Stardust v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        StardustConfig::default()
    });
    if args.seed.is_some() {
        config.point_field.seed = args.seed;
    }
    tracing::info!(
        "Config loaded ({} points, msaa={})",
        config.point_field.grid_size as u64 * config.point_field.grid_size as u64,
        config.viewport.msaa_samples,
    );

    if args.print_config {
        println!("{}", stardust_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    if args.headless {
        return match headless::run(&config, args.frames) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Headless run failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match run_windowed(config, args.frames) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the winit event loop until the window closes or the frame loop stops.
fn run_windowed(config: StardustConfig, frames: Option<u64>) -> Result<ExitCode, StardustError> {
    let event_loop = EventLoop::new().map_err(|e| StardustError::EventLoop(e.to_string()))?;
    let mut app = app_state::StardustApp::new(config, frames);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| StardustError::EventLoop(e.to_string()))?;
    tracing::info!("Shutdown complete");
    Ok(app.exit_code())
}
