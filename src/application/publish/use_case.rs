//! Publish Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Parse the publish-settings profile
//! 2. Classify the source artifact
//! 3. Resolve the deployment variables
//! 4. Build the destination path and endpoint
//! 5. Open a scoped source session, apply parameter overrides
//! 6. Synchronize and report the change summary
//!
//! This use case is pure orchestration; classification, variable
//! resolution, and path building live in domain services.

use std::sync::Arc;

use crate::domain::entities::ContentKind;
use crate::domain::ports::{
    DestinationOptions, ProfileReader, ProviderKind, PublishEvent, PublishEventSink, SourceOptions,
    SyncEngine, SyncOptions, TraceLevel,
};
use crate::domain::services::{classify, destination_path, endpoint_url, DeploymentVariables};
use crate::error::{SitepushError, SitepushResult};

use super::options::PublishOptions;
use super::result::PublishResult;

/// Publish use case, parameterized by its ports
pub struct PublishUseCase<PR, E>
where
    PR: ProfileReader,
    E: SyncEngine,
{
    profile_reader: PR,
    engine: E,
}

impl<PR, E> PublishUseCase<PR, E>
where
    PR: ProfileReader,
    E: SyncEngine,
{
    pub fn new(profile_reader: PR, engine: E) -> Self {
        Self {
            profile_reader,
            engine,
        }
    }

    /// Execute the publish use case
    ///
    /// Any parse or classification failure returns before a session is
    /// opened. A summary with item-level errors is still a success at this
    /// level; only collaborator failures map to `SyncFailed`.
    pub fn execute(
        &self,
        options: &PublishOptions,
        sink: Arc<dyn PublishEventSink>,
    ) -> SitepushResult<PublishResult> {
        let profile = self.profile_reader.read(&options.publish_settings)?;
        let descriptor = classify(&options.source)?;
        let variables = DeploymentVariables::resolve(&profile);

        let destination = destination_path(&profile.site_name, &descriptor);
        let endpoint = endpoint_url(&profile.publish_url, &profile.site_name);

        sink.on_event(PublishEvent::Started {
            source: descriptor.source_path.clone(),
            kind: descriptor.kind,
            destination_url: profile.display_url().to_string(),
        });

        let source_provider = match descriptor.kind {
            ContentKind::Package => ProviderKind::Package,
            ContentKind::Directory | ContentKind::SingleFile => ProviderKind::ContentPath,
        };
        let destination_provider = match descriptor.kind {
            ContentKind::Package => ProviderKind::Auto,
            ContentKind::Directory | ContentKind::SingleFile => ProviderKind::ContentPath,
        };

        if options.dry_run {
            return Ok(PublishResult {
                summary: Default::default(),
                kind: descriptor.kind,
                destination_path: destination,
                destination_url: profile.display_url().to_string(),
                endpoint,
                applied_parameters: Vec::new(),
                dry_run: true,
            });
        }

        let destination_options = DestinationOptions {
            computer_name: endpoint.clone(),
            user_name: profile.user_name.clone(),
            password: profile.password.clone(),
            include_acls: true,
            trace_level: if options.verbose {
                TraceLevel::Verbose
            } else {
                TraceLevel::Info
            },
            trace: Some({
                let sink = sink.clone();
                Arc::new(move |message: &str| {
                    sink.on_event(PublishEvent::Trace {
                        message: message.to_string(),
                    });
                })
            }),
        };
        let sync_options = SyncOptions {
            do_not_delete: !options.allow_delete,
        };

        // The boxed session is the scoped resource: it is dropped on every
        // exit path below, including the early error returns.
        let mut session = self
            .engine
            .open_session(source_provider, descriptor.path(), &SourceOptions::default())
            .map_err(|e| SitepushError::SyncFailed {
                message: e.to_string(),
            })?;

        // Override the artifact's declared parameters by exact name;
        // everything else passes through with its provider default.
        let declared: Vec<String> = session
            .parameters()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        let mut applied = Vec::new();
        for name in declared {
            if let Some(value) = variables.get(&name) {
                session
                    .set_parameter(&name, value)
                    .map_err(|e| SitepushError::SyncFailed {
                        message: e.to_string(),
                    })?;
                applied.push(name);
            }
        }

        let summary = session
            .sync_to(
                destination_provider,
                &destination,
                &destination_options,
                &sync_options,
            )
            .map_err(|e| SitepushError::SyncFailed {
                message: e.to_string(),
            })?;

        sink.on_event(PublishEvent::Completed { summary });

        Ok(PublishResult {
            summary,
            kind: descriptor.kind,
            destination_path: destination,
            destination_url: profile.display_url().to_string(),
            endpoint,
            applied_parameters: applied,
            dry_run: false,
        })
    }
}
