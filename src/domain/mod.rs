// Domain layer: status types and the collaborator ports. No IO here.

pub mod model;
pub mod ports;
