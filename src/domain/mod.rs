// Domain layer: listing records, store reports and the ports the core depends on.

pub mod model;
pub mod ports;
