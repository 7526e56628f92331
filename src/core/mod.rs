pub mod file_manager;
pub mod mailer;
pub mod notification;
pub mod report;

pub use crate::domain::model::Message;
pub use crate::domain::ports::{Channel, MessageSender};
pub use crate::utils::error::Result;
