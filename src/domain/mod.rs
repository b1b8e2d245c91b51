//! Domain layer
//!
//! Entities, ports, and pure services. Nothing here talks to the network
//! or spawns processes.

pub mod entities;
pub mod ports;
pub mod services;
