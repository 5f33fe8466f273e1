// Domain layer: the customer record and the ports (capabilities) the adapters bridge.

pub mod model;
pub mod ports;
