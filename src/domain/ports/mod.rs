//! Domain ports
//!
//! Traits at the seams: profile parsing, the external sync collaborator,
//! and the operator-visible event stream.

pub mod events;
pub mod profile_reader;
pub mod sync_engine;

pub use events::{NoopEventSink, PublishEvent, PublishEventSink};
pub use profile_reader::ProfileReader;
pub use sync_engine::{
    DestinationOptions, ProviderKind, SourceOptions, SourceSession, SyncEngine, SyncError,
    SyncOptions, SyncParameter, TraceCallback, TraceLevel,
};
