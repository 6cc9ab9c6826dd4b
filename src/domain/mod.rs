// Domain layer: the project record, render fragments and the surface ports the core draws into.

pub mod model;
pub mod ports;
