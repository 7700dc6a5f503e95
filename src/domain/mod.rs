// Domain layer: request/response models and ports. No external dependencies beyond serde.

pub mod model;
pub mod ports;
