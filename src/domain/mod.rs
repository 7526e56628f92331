// Domain layer: the message record and the ports (traits) senders and channels implement.

pub mod model;
pub mod ports;
