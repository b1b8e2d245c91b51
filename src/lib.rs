//! sitepush - publish a local artifact to a remote web host
//!
//! sitepush reads a declarative publish-settings profile, classifies the
//! local source (package archive, directory tree, or single file), resolves
//! the well-known deployment variables, and drives a source-to-destination
//! synchronization through an external sync engine, reporting progress and
//! a structured change summary.

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PublishOptions, PublishResult, PublishUseCase};
pub use domain::entities::{
    ChangeSummary, ContentDescriptor, ContentKind, DatabaseBinding, DeploymentProfile,
};
pub use domain::ports::{
    ProfileReader, ProviderKind, PublishEvent, PublishEventSink, SourceSession, SyncEngine,
    SyncOptions,
};
pub use domain::services::{classify, destination_path, endpoint_url, DeploymentVariables};
pub use error::{SitepushError, SitepushResult};
pub use infrastructure::{MsDeployEngine, XmlProfileReader};
