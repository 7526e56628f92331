use crate::adapters::ConsoleChannel;
use crate::domain::model::Message;
use crate::domain::ports::{Channel, MessageSender};
use std::sync::Arc;

/// Sends messages as email. Emits to the console unless given a channel.
#[derive(Clone)]
pub struct Email {
    channel: Arc<dyn Channel>,
}

impl Email {
    pub fn new() -> Self {
        Self::with_channel(Arc::new(ConsoleChannel::new()))
    }

    pub fn with_channel(channel: Arc<dyn Channel>) -> Self {
        Self { channel }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSender for Email {
    fn send_message(&self, content: &str, recipient: &str) {
        tracing::debug!("Sending email to {}", recipient);
        self.channel.emit(&Message::new(content, recipient));
    }
}

/// Sends messages as SMS. Emits to the console unless given a channel.
#[derive(Clone)]
pub struct Sms {
    channel: Arc<dyn Channel>,
}

impl Sms {
    pub fn new() -> Self {
        Self::with_channel(Arc::new(ConsoleChannel::new()))
    }

    pub fn with_channel(channel: Arc<dyn Channel>) -> Self {
        Self { channel }
    }
}

impl Default for Sms {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSender for Sms {
    fn send_message(&self, content: &str, recipient: &str) {
        tracing::debug!("Sending SMS to {}", recipient);
        self.channel.emit(&Message::new(content, recipient));
    }
}

/// Delivers notifications through whichever sender it was built with.
pub struct NotificationService {
    provider: Box<dyn MessageSender>,
}

impl NotificationService {
    pub fn new(provider: impl MessageSender + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    pub fn send_notification(&self, content: &str, recipient: &str) {
        self.provider.send_message(content, recipient);
    }
}
