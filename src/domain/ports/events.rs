//! Publish Event Port
//!
//! The operator-visible output stream, passed explicitly instead of writing
//! to the console ambiently. This is what lets tests capture trace output.

use std::path::PathBuf;

use crate::domain::entities::{ChangeSummary, ContentKind};

/// Event emitted during a publish run
#[derive(Debug, Clone)]
pub enum PublishEvent {
    /// Deployment is starting
    Started {
        source: PathBuf,
        kind: ContentKind,
        destination_url: String,
    },

    /// A trace message from the sync engine, forwarded as it arrives
    Trace { message: String },

    /// Synchronization finished and returned a summary
    Completed { summary: ChangeSummary },
}

/// Trait for receiving publish events
///
/// Trace events may arrive from whatever thread the sync engine uses, so
/// implementations must be `Send + Sync` and side-effect-only.
pub trait PublishEventSink: Send + Sync {
    fn on_event(&self, event: PublishEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PublishEventSink for NoopEventSink {
    fn on_event(&self, _event: PublishEvent) {
        // Do nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingEventSink {
        events: Arc<Mutex<Vec<PublishEvent>>>,
    }

    impl PublishEventSink for RecordingEventSink {
        fn on_event(&self, event: PublishEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(PublishEvent::Started {
            source: PathBuf::from("site.zip"),
            kind: ContentKind::Package,
            destination_url: "https://contoso.example.com".to_string(),
        });
        sink.on_event(PublishEvent::Trace {
            message: "Adding file (site/web.config)".to_string(),
        });

        assert_eq!(events.lock().unwrap().len(), 2);
    }
}
