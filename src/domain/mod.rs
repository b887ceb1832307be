// Domain layer: outcome values and the ports hosts plug into.

pub mod model;
pub mod ports;
