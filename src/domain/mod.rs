// Domain layer: passive models and ports. No I/O and no calculation logic here.

pub mod equipment;
pub mod model;
pub mod plants;
pub mod ports;
pub mod reagents;
