//! Common test utilities for sitepush CLI tests.
//!
//! Provides `TestEnv`, an isolated temp-directory environment with helpers
//! to run the binary, plus reusable profile fixtures.

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
