mod common;

use anyhow::Result;
use solid_demos::app::{run_legacy_demo, run_notification_demo, run_report_demo};
use solid_demos::config::toml_config::ReportConfig;
use solid_demos::{DemoConfig, MemoryChannel, Message, Report, ReportV2};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn notification_demo_sends_email_then_sms() {
    let channel = Arc::new(MemoryChannel::new());
    let config = DemoConfig::default();

    run_notification_demo(&config.notification, channel.clone());

    assert_eq!(
        channel.messages(),
        vec![
            Message::new("notification via Email", "Othman"),
            Message::new("notification via SMS", "Othman"),
        ]
    );
}

#[test]
fn report_demo_writes_configured_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = DemoConfig::default().with_output_dir(temp_dir.path().to_string_lossy());

    let report = run_report_demo(&config.report);

    assert!(ReportV2::review_report(&report));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Report V2.txt"))?,
        "Lorem ipsum dolor, sit amet consectetur adipisicing elit."
    );
    Ok(())
}

#[test]
fn report_demo_survives_unwritable_output_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = ReportConfig {
        output_dir: temp_dir.path().join("gone").to_string_lossy().into_owned(),
        ..ReportConfig::default()
    };

    let (report, logs) = common::with_captured_logs(|| run_report_demo(&config));

    assert_eq!(report.name(), "Report V2.txt");
    assert!(logs.contains("Could not save"));
    assert!(!temp_dir.path().join("gone").exists());
    Ok(())
}

#[test]
fn legacy_demo_writes_report_txt() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = DemoConfig::default().with_output_dir(temp_dir.path().to_string_lossy());

    let report = run_legacy_demo(&config);

    assert!(Report::review_report(&report));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Report.txt"))?,
        "Report Created!"
    );
    Ok(())
}
