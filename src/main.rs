//! Toolbox CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use toolbox::cli::{Cli, CommandDispatcher};
use toolbox::config::load_config;
use toolbox::shell::{absolutize, current_root, is_ci};
use toolbox::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout of `shell-init` is evaluated by the shell.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolbox=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolbox=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toolbox starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Determine project root
    let project_root = match &cli.project {
        Some(dir) => Some(absolutize(dir)),
        None => current_root(),
    };
    tracing::debug!("Project root: {:?}", project_root);

    // Handle --no-color and the config color switch
    let config_disables_color = project_root
        .as_deref()
        .and_then(|root| load_config(root).ok())
        .is_some_and(|config| !config.color);
    if cli.no_color || config_disables_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Create UI
    let mut ui = create_ui(!is_ci(), output_mode);

    // Dispatch command
    let dispatcher = CommandDispatcher::new(project_root).with_prefix(cli.prefix.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
