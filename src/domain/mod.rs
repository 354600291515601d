// Domain layer: response model, extraction settings and the extractor port.

pub mod model;
pub mod ports;
