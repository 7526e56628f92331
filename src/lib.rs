pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, DemoKind};

pub use adapters::{ConsoleChannel, MemoryChannel};
pub use config::DemoConfig;
pub use crate::core::file_manager::{FileManager, FileMode};
pub use crate::core::mailer::{Mailer, NotificationSender};
pub use crate::core::notification::{Email, NotificationService, Sms};
pub use crate::core::report::{Report, ReportV2};
pub use domain::model::Message;
pub use domain::ports::{Channel, MessageSender};
pub use utils::error::{DemoError, Result};
