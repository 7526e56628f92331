// Adapters layer: concrete channels the message senders emit into.

pub mod channel;

pub use channel::{ConsoleChannel, MemoryChannel};
