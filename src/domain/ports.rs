use crate::domain::model::Message;

/// Anything able to deliver a message to a recipient.
///
/// Delivery is fire-and-forget: there is no success value and no error.
pub trait MessageSender: Send + Sync {
    fn send_message(&self, content: &str, recipient: &str);
}

impl<T: MessageSender + ?Sized> MessageSender for Box<T> {
    fn send_message(&self, content: &str, recipient: &str) {
        (**self).send_message(content, recipient);
    }
}

/// Sink that receives the records senders emit.
pub trait Channel: Send + Sync {
    fn emit(&self, message: &Message);
}
