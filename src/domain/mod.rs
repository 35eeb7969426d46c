// Domain layer: clock values, slot results and the input port.

pub mod clock;
pub mod model;
pub mod ports;
