// Domain layer: contact form models and the outbound email port.

pub mod model;
pub mod ports;
