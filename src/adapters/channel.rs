use crate::domain::model::Message;
use crate::domain::ports::Channel;
use std::sync::Mutex;
use tracing::{info, warn};

/// Writes each record to stdout as one JSON line.
#[derive(Debug, Clone, Default)]
pub struct ConsoleChannel;

impl ConsoleChannel {
    pub fn new() -> Self {
        Self
    }
}

impl Channel for ConsoleChannel {
    fn emit(&self, message: &Message) {
        match message.to_json() {
            Ok(line) => {
                println!("{}", line);
                info!(to = %message.recipient, "Message emitted to console");
            }
            Err(e) => warn!("Could not encode message for {}: {}", message.recipient, e),
        }
    }
}

/// Keeps every emitted record in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    messages: Mutex<Vec<Message>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Channel for MemoryChannel {
    fn emit(&self, message: &Message) {
        tracing::debug!(to = %message.recipient, "Message recorded in memory");
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.clone());
    }
}
