// Domain layer: summary models and the artifact store port. No I/O here.

pub mod model;
pub mod ports;
