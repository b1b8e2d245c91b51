//! Domain entities

pub mod content;
pub mod profile;
pub mod summary;

pub use content::{ContentDescriptor, ContentKind};
pub use profile::{DatabaseBinding, DeploymentProfile};
pub use summary::ChangeSummary;
