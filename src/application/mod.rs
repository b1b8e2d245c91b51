//! Application layer

pub mod publish;

pub use publish::{PublishOptions, PublishResult, PublishUseCase};
