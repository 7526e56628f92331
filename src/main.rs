use anyhow::Context;
use clap::Parser;
use solid_demos::app;
use solid_demos::utils::{logger, validation::Validate};
use solid_demos::{CliConfig, ConsoleChannel, DemoConfig, DemoKind};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting solid-demos");
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match DemoConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Failed to load config file '{}': {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => DemoConfig::default(),
    };

    if let Some(output_dir) = &cli.output_dir {
        config = config.with_output_dir(output_dir.as_str());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if cli.runs(DemoKind::Notification) {
        app::run_notification_demo(&config.notification, Arc::new(ConsoleChannel::new()));
    }

    if cli.runs(DemoKind::Report) {
        let report = app::run_report_demo(&config.report);
        tracing::debug!("Report demo finished with {} bytes of content", report.content().len());
    }

    if cli.runs(DemoKind::Legacy) {
        app::run_legacy_demo(&config);
    }

    let summary = serde_json::to_string(&config).context("encoding run summary")?;
    tracing::info!("Finished with configuration {}", summary);
    Ok(())
}
