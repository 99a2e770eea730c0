// Domain layer: value objects and ports (interfaces).

pub mod model;
pub mod ports;
