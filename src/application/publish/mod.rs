//! Publish use case

pub mod options;
pub mod result;
pub mod use_case;


pub use options::PublishOptions;
pub use result::PublishResult;
pub use use_case::PublishUseCase;
