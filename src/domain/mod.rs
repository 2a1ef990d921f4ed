// Domain layer: level records, filter outcome and the ports the pipeline depends on.

pub mod model;
pub mod ports;
