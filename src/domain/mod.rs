// Domain layer: core models, ports (interfaces) and the qualification rules.
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;
pub mod services;
