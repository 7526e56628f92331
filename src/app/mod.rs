//! Runs the demos end to end, in the order a reader would walk through them.

use crate::config::toml_config::{DemoConfig, NotificationConfig, ReportConfig};
use crate::core::mailer::NotificationSender;
use crate::core::notification::{Email, NotificationService, Sms};
use crate::core::report::{Report, ReportV2};
use crate::domain::ports::Channel;
use std::sync::Arc;

pub fn run_notification_demo(config: &NotificationConfig, channel: Arc<dyn Channel>) {
    tracing::info!("Running notification demo");

    let notify_by_email = NotificationService::new(Email::with_channel(channel.clone()));
    let notify_by_sms = NotificationService::new(Sms::with_channel(channel));

    notify_by_email.send_notification(&config.email_message, &config.recipient);
    notify_by_sms.send_notification(&config.sms_message, &config.recipient);
}

pub fn run_report_demo(config: &ReportConfig) -> ReportV2 {
    tracing::info!("Running report demo for {}", config.name);

    let mut report = ReportV2::new(config.name.as_str());
    println!("{}", ReportV2::review_report(&report));

    report.generate_report(config.content.as_str());
    println!("{}", ReportV2::review_report(&report));

    report.export_report_in(&config.output_dir);
    report
}

/// The coupled versions: a sender that can only email, and a report that writes its own file.
pub fn run_legacy_demo(config: &DemoConfig) -> Report {
    tracing::info!("Running legacy demo");

    let notification_sender = NotificationSender::new();
    notification_sender.send_notification("hello world", &config.notification.recipient);

    let mut report = Report::new();
    println!("{}", Report::review_report(&report));

    report.generate_report("Report Created!");
    report.save_to(&config.report.output_dir);
    report
}
