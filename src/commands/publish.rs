//! Publish command wiring
//!
//! Connects the CLI surface to the publish use case: argument checks,
//! sink/renderer selection, and construction of the concrete adapters.

use std::sync::Arc;

use crate::application::{PublishOptions, PublishUseCase};
use crate::cli::Cli;
use crate::domain::ports::{NoopEventSink, PublishEventSink};
use crate::error::{SitepushError, SitepushResult};
use crate::infrastructure::{MsDeployEngine, XmlProfileReader};
use crate::presentation::{create_renderer, ConsoleEventSink, OutputFormat};

/// Run a publish from parsed CLI arguments
pub fn run(cli: &Cli) -> SitepushResult<()> {
    // The profile path is checked before the source path; tests rely on
    // this ordering.
    if !cli.publish_settings.exists() {
        return Err(SitepushError::NotFound {
            path: cli.publish_settings.clone(),
        });
    }
    if !cli.source.exists() {
        return Err(SitepushError::NotFound {
            path: cli.source.clone(),
        });
    }

    let options = PublishOptions::new(&cli.publish_settings, &cli.source)
        .with_allow_delete(cli.allow_delete)
        .with_dry_run(cli.dry_run)
        .with_verbose(cli.verbose > 0);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    // JSON mode reports one object at the end; the live stream stays quiet
    let sink: Arc<dyn PublishEventSink> = match format {
        OutputFormat::Text => Arc::new(ConsoleEventSink),
        OutputFormat::Json => Arc::new(NoopEventSink),
    };

    let engine = MsDeployEngine::new();
    if !cli.dry_run && !engine.check_available() {
        return Err(SitepushError::SyncFailed {
            message: "msdeploy client not found on PATH".to_string(),
        });
    }

    let use_case = PublishUseCase::new(XmlProfileReader::new(), engine);
    let result = use_case.execute(&options, sink)?;

    create_renderer(format).render(&result, &cli.source);
    Ok(())
}
