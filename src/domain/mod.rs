// Domain layer: API records and ports (interfaces). Only serde beyond std.

pub mod model;
pub mod ports;
