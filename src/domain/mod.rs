// Domain layer: wire models and the transport port. No HTTP client code here.

#[macro_use]
mod macros;

pub mod enums;
pub mod models;
pub mod ports;
pub mod raw;
