// Domain layer: operation and result models plus the ports the shell depends on.

pub mod model;
pub mod ports;
