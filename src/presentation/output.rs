//! Output Rendering
//!
//! Event sinks for the live stream (start message, engine trace lines) and
//! renderers for the final result. Text and JSON formats.

use std::path::Path;

use crate::application::PublishResult;
use crate::domain::ports::{PublishEvent, PublishEventSink};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Event sink that writes the live publish stream to stdout
///
/// Trace lines are forwarded verbatim as they arrive.
pub struct ConsoleEventSink;

impl PublishEventSink for ConsoleEventSink {
    fn on_event(&self, event: PublishEvent) {
        match event {
            PublishEvent::Started {
                source,
                destination_url,
                ..
            } => {
                println!("Publishing {} to {}", source.display(), destination_url);
            }
            PublishEvent::Trace { message } => {
                println!("{}", message);
            }
            PublishEvent::Completed { .. } => {
                // The renderer owns the completion output
            }
        }
    }
}

/// Trait for rendering publish results
pub trait PublishResultRenderer {
    fn render(&self, result: &PublishResult, source: &Path);
}

/// Text renderer for publish results
#[derive(Default)]
pub struct TextRenderer;

impl PublishResultRenderer for TextRenderer {
    fn render(&self, result: &PublishResult, source: &Path) {
        if result.dry_run {
            println!("Dry run - nothing was synchronized.");
            println!("Source: {} ({})", source.display(), result.kind.display_name());
            println!("Destination: {}", result.destination_path);
            println!("Endpoint: {}", result.endpoint);
            return;
        }

        println!("Deployment finished.");
        println!("Added: {}", result.summary.added);
        println!("Updated: {}", result.summary.updated);
        println!("Deleted: {}", result.summary.deleted);
        println!("Total errors: {}", result.summary.errors);
        println!("Total changes: {}", result.summary.total_changes);
    }
}

/// JSON renderer for publish results
pub struct JsonRenderer;

impl PublishResultRenderer for JsonRenderer {
    fn render(&self, result: &PublishResult, source: &Path) {
        let json = serde_json::json!({
            "success": true,
            "dry_run": result.dry_run,
            "source": source.display().to_string(),
            "kind": result.kind.display_name(),
            "destination_path": result.destination_path,
            "destination_url": result.destination_url,
            "endpoint": result.endpoint,
            "applied_parameters": result.applied_parameters,
            "summary": result.summary,
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn PublishResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
