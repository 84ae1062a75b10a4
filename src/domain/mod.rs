// Domain layer: value types, constants and ports. No I/O here.

pub mod constants;
pub mod model;
pub mod ports;
