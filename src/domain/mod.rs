// Domain layer: item/order value types and the message source port.

pub mod model;
pub mod ports;
