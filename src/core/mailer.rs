//! The tightly coupled notification sender: it builds its own [`Mailer`] and
//! can only ever send email. Compare with
//! [`NotificationService`](crate::core::notification::NotificationService).

use crate::adapters::ConsoleChannel;
use crate::domain::model::Message;
use crate::domain::ports::Channel;
use std::sync::Arc;

#[derive(Clone)]
pub struct Mailer {
    channel: Arc<dyn Channel>,
}

impl Mailer {
    pub fn new() -> Self {
        Self::with_channel(Arc::new(ConsoleChannel::new()))
    }

    pub fn with_channel(channel: Arc<dyn Channel>) -> Self {
        Self { channel }
    }

    pub fn send_email(&self, message: &str, to: &str) {
        self.channel.emit(&Message::new(message, to));
    }
}

impl Default for Mailer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct NotificationSender {
    mail_sender: Mailer,
}

impl NotificationSender {
    pub fn new() -> Self {
        Self {
            mail_sender: Mailer::new(),
        }
    }

    pub fn send_notification(&self, message: &str, to: &str) {
        self.mail_sender.send_email(message, to);
    }
}

impl Default for NotificationSender {
    fn default() -> Self {
        Self::new()
    }
}
