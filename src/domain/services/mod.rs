//! Domain services
//!
//! Pure functions and value types with no side effects beyond filesystem
//! inspection in the classifier.

pub mod classifier;
pub mod destination;
pub mod parameters;

pub use classifier::classify;
pub use destination::{destination_path, endpoint_url};
pub use parameters::{DeploymentVariables, VARIABLE_NAMES};
