//! Sync engine adapters

pub mod msdeploy;

pub use msdeploy::MsDeployEngine;
