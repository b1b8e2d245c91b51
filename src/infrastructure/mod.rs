//! Infrastructure layer
//!
//! Concrete adapters behind the domain ports: the XML profile reader and
//! the CLI-backed sync engine.

pub mod engine;
pub mod profile;

pub use engine::MsDeployEngine;
pub use profile::XmlProfileReader;
