pub mod configuration;
pub mod dom;
pub mod domain;
pub mod events;
pub mod listeners;
pub mod startup;
pub mod surface;
pub mod telemetry;
pub mod transport;
pub mod utils;
