//! Presentation layer

pub mod output;

pub use output::{
    create_renderer, ConsoleEventSink, JsonRenderer, OutputFormat, PublishResultRenderer,
    TextRenderer,
};
