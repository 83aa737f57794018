// Domain layer: design constants, models and ports.

pub mod model;
pub mod ports;
